use log::{debug, warn};
use tokio::sync::broadcast;

/// Distance from the bottom of the document, in layout units, that counts as "near the bottom"
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 500.0;

const FEED_CAPACITY: usize = 64;

/// Viewport geometry captured for one scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(viewport_height: f64, scroll_offset: f64, document_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_offset,
            document_height,
        }
    }

    /// Viewport scrolled all the way down a document of the given height
    pub fn at_bottom(viewport_height: f64, document_height: f64) -> Self {
        let scroll_offset = (document_height - viewport_height).max(0.0);
        Self::new(viewport_height, scroll_offset, document_height)
    }

    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_offset >= self.document_height - threshold
    }
}

/// Source of scroll events, one per rendering surface
#[derive(Debug, Clone)]
pub struct ScrollFeed {
    sender: broadcast::Sender<ScrollMetrics>,
}

impl ScrollFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    /// Publishes a scroll event. Returns how many observers received it.
    pub fn send(&self, metrics: ScrollMetrics) -> usize {
        self.sender.send(metrics).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ScrollFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Observes a [`ScrollFeed`] between `start` and `stop`.
///
/// The subscription is released on `stop` or when the sentinel is dropped.
#[derive(Debug, Default)]
pub struct ScrollSentinel {
    subscription: Option<broadcast::Receiver<ScrollMetrics>>,
}

impl ScrollSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, feed: &ScrollFeed) {
        if self.subscription.is_some() {
            debug!("Scroll sentinel restarted, replacing previous subscription");
        }
        self.subscription = Some(feed.sender.subscribe());
    }

    pub fn stop(&mut self) {
        self.subscription = None;
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Waits for the next scroll event.
    ///
    /// Returns `None` when not subscribed or once the feed is gone; in the
    /// latter case the subscription is released.
    pub async fn next_metrics(&mut self) -> Option<ScrollMetrics> {
        loop {
            let receiver = self.subscription.as_mut()?;
            match receiver.recv().await {
                Ok(metrics) => return Some(metrics),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Dropped {} scroll events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Scroll feed closed");
                    self.subscription = None;
                    return None;
                }
            }
        }
    }
}
