//! Game detail page extraction.
//!
//! A detail page lists the pitching decisions and the venue of a single
//! game. This is an auxiliary source and is not part of the weekly export.

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

use super::text::select_text;
use crate::constants::selectors::detail;
use crate::data_fetcher::api::fetch_page;
use crate::data_fetcher::models::GameDetails;

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("built-in detail selector must be valid CSS")
}

static PLAYER_BLOCK: Lazy<Selector> = Lazy::new(|| compile(detail::PLAYER_BLOCK));
static LABEL: Lazy<Selector> = Lazy::new(|| compile(detail::LABEL));
static NAME: Lazy<Selector> = Lazy::new(|| compile(detail::NAME));
static STADIUM: Lazy<Selector> = Lazy::new(|| compile(detail::STADIUM));

/// Extracts winning pitcher, losing pitcher and stadium from a detail page.
///
/// Each field independently falls back to "no information". When several
/// blocks carry the same label, the last one wins.
pub fn extract_game_details(document: &Html) -> GameDetails {
    let mut details = GameDetails::unavailable();
    let root = document.root_element();

    for block in document.select(&PLAYER_BLOCK) {
        let Some(label) = select_text(block, &LABEL) else {
            continue;
        };
        let target = if label.contains(detail::WINNING_LABEL) {
            &mut details.winning_pitcher
        } else if label.contains(detail::LOSING_LABEL) {
            &mut details.losing_pitcher
        } else {
            continue;
        };

        match select_text(block, &NAME) {
            Some(name) => *target = name,
            None => debug!("Pitcher block '{label}' has no name node"),
        }
    }

    if let Some(stadium) = select_text(root, &STADIUM) {
        details.stadium = stadium;
    }

    details
}

/// Fetches a detail page and extracts its game details.
///
/// Any fetch failure is logged and converted into the all-"no information"
/// result; this function never fails.
#[instrument(skip(client))]
pub async fn fetch_game_details(client: &Client, url: &str) -> GameDetails {
    match fetch_page(client, url).await {
        Ok(body) => extract_game_details(&Html::parse_document(&body)),
        Err(e) => {
            warn!("Failed to fetch game detail page {url}: {e}");
            GameDetails::unavailable()
        }
    }
}
