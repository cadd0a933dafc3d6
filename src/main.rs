use log::{debug, info};
use std::env;

use recipe_search::render::{render_html, render_text};
use recipe_search::{
    EdamamGateway, ImageAllowList, ScrollFeed, ScrollMetrics, SearchConfig, SearchView, ViewEvent,
};

const USAGE: &str = "Usage: recipe-search [QUERY] [--pages N] [--html]";
const VIEWPORT_HEIGHT: f64 = 900.0;
const CARD_HEIGHT: f64 = 320.0;

struct Args {
    query: String,
    pages: u32,
    html: bool,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut args = Args {
        query: String::new(),
        pages: 1,
        html: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--pages" => {
                let value = iter.next().ok_or(USAGE)?;
                args.pages = value.parse()?;
            }
            "--html" => args.html = true,
            "-h" | "--help" => return Err(USAGE.into()),
            _ if args.query.is_empty() => args.query = arg,
            _ => return Err(USAGE.into()),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = parse_args()?;
    let config = SearchConfig::load()?;
    let images = ImageAllowList::from_config(&config.images);

    let mut view = SearchView::builder()
        .gateway(EdamamGateway::new(&config)?)
        .config(&config)
        .query(args.query)
        .build()?;

    let feed = ScrollFeed::new();
    view.start(&feed);
    view.mount();
    view.settle().await;

    // Scroll to the bottom of the rendered cards until enough pages were requested
    while view.state().page().number() < args.pages {
        let document_height = view.state().results().len() as f64 * CARD_HEIGHT;
        feed.send(ScrollMetrics::at_bottom(VIEWPORT_HEIGHT, document_height));

        let requested = matches!(
            view.pump().await,
            Some(ViewEvent::Scrolled { advanced: true })
        );
        view.settle().await;
        if !requested {
            debug!("Scroll did not request another page, stopping");
            break;
        }
    }

    view.stop();
    info!(
        "Loaded {} recipes over {} page(s)",
        view.state().results().len(),
        view.state().page()
    );

    if args.html {
        print!("{}", render_html(view.state(), &images));
    } else {
        print!("{}", render_text(view.state(), &images));
    }

    Ok(())
}
