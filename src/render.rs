//! Text and HTML renderings of a search page.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::images::ImageAllowList;
use crate::model::Recipe;
use crate::state::SearchState;

pub const LOGO_URL: &str =
    "https://w7.pngwing.com/pngs/426/730/png-transparent-logo-yellow-font-recipe-logo-art-yellow.png";

const EMPTY_PLACEHOLDER: &str = "Loading Recipes...";
const LOADING_INDICATOR: &str = "Loading...";

/// One card as plain text
pub fn render_card(recipe: &Recipe, images: &ImageAllowList) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", recipe.label);
    let _ = writeln!(
        card,
        "  {} CALORIES | {} INGREDIENTS",
        recipe.calories_display(),
        recipe.ingredient_count()
    );
    let _ = writeln!(card, "  {}", recipe.source);
    if images.permits(&recipe.image) {
        let _ = writeln!(card, "  image: {}", recipe.image);
    }
    let _ = writeln!(card, "  {}", recipe.url);
    card
}

/// The whole page as plain text: error, cards (or placeholder), loading indicator
pub fn render_text(state: &SearchState, images: &ImageAllowList) -> String {
    let mut page = String::new();

    if let Some(error) = state.error() {
        let _ = writeln!(page, "{}\n", error);
    }

    if state.results().is_empty() {
        let _ = writeln!(page, "{}", EMPTY_PLACEHOLDER);
    } else {
        for recipe in state.results().iter() {
            page.push_str(&render_card(recipe, images));
            page.push('\n');
        }
    }

    if state.is_loading() {
        let _ = writeln!(page, "{}", LOADING_INDICATOR);
    }

    page
}

/// The whole page as a standalone HTML document
pub fn render_html(state: &SearchState, images: &ImageAllowList) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", encode_text(&page_title(state)));
    html.push_str("</head>\n<body>\n<header>\n");
    if images.permits(LOGO_URL) {
        let _ = writeln!(
            html,
            "<img class=\"logo\" src=\"{}\" alt=\"Edamam Logo\" width=\"40\" height=\"40\">",
            encode_double_quoted_attribute(LOGO_URL)
        );
    }
    html.push_str("<span class=\"brand\">EDAMAM</span>\n");
    let _ = writeln!(
        html,
        "<form><input type=\"text\" name=\"q\" placeholder=\"Search Recipes..\" value=\"{}\"></form>",
        encode_double_quoted_attribute(state.query())
    );
    html.push_str("</header>\n<main>\n");

    if let Some(error) = state.error() {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", encode_text(error));
    }

    html.push_str("<div class=\"grid\">\n");
    if state.results().is_empty() {
        let _ = writeln!(html, "<p>{}</p>", EMPTY_PLACEHOLDER);
    } else {
        for recipe in state.results().iter() {
            html.push_str(&card_html(recipe, images));
        }
    }
    html.push_str("</div>\n");

    if state.is_loading() {
        let _ = writeln!(html, "<div class=\"spinner\">{}</div>", LOADING_INDICATOR);
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn page_title(state: &SearchState) -> String {
    if state.query().is_empty() {
        "Recipe Search".to_string()
    } else {
        format!("{} - Recipe Search", state.query())
    }
}

fn card_html(recipe: &Recipe, images: &ImageAllowList) -> String {
    let mut card = String::new();
    let _ = writeln!(
        card,
        "<div class=\"card\" data-uri=\"{}\">",
        encode_double_quoted_attribute(&recipe.uri)
    );
    if images.permits(&recipe.image) {
        let _ = writeln!(
            card,
            "<img src=\"{}\" alt=\"{}\" width=\"300\" height=\"200\">",
            encode_double_quoted_attribute(&recipe.image),
            encode_double_quoted_attribute(&recipe.label)
        );
    }
    let _ = writeln!(card, "<h3>{}</h3>", encode_text(&recipe.label));
    let _ = writeln!(
        card,
        "<span class=\"calories\">{} CALORIES</span><span class=\"ingredients\">{} INGREDIENTS</span>",
        recipe.calories_display(),
        recipe.ingredient_count()
    );
    let _ = writeln!(card, "<div class=\"source\">{}</div>", encode_text(&recipe.source));
    let _ = writeln!(
        card,
        "<a href=\"{}\"><span class=\"sr-only\">View recipe</span></a>",
        encode_double_quoted_attribute(&recipe.url)
    );
    card.push_str("</div>\n");
    card
}
