//! Schedule page extraction.
//!
//! Walks every table body of the schedule page and turns each result row
//! into a [`GameRecord`]. Missing nodes never fail the extraction; they
//! produce absent fields or the sentinel values described on each step.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::text::{element_text, normalize_score, select_text};
use crate::constants::{selectors, sentinel};
use crate::data_fetcher::models::GameRecord;

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("built-in schedule selector must be valid CSS")
}

static TABLE_BODY: Lazy<Selector> = Lazy::new(|| compile(selectors::TABLE_BODY));
static ROW: Lazy<Selector> = Lazy::new(|| compile(selectors::ROW));
static DATE_HEADER: Lazy<Selector> = Lazy::new(|| compile(selectors::DATE_HEADER));
static HOME_NAME: Lazy<Selector> = Lazy::new(|| compile(selectors::HOME_NAME));
static AWAY_NAME: Lazy<Selector> = Lazy::new(|| compile(selectors::AWAY_NAME));
static SCORE: Lazy<Selector> = Lazy::new(|| compile(selectors::SCORE));
static WINNING_PITCHER: Lazy<Selector> = Lazy::new(|| compile(selectors::WINNING_PITCHER));
static LOSING_PITCHER: Lazy<Selector> = Lazy::new(|| compile(selectors::LOSING_PITCHER));
static STADIUM: Lazy<Selector> = Lazy::new(|| compile(selectors::STADIUM));

const NO_TABLE_BODY: &str = "No table body found in schedule page, no data to extract";

/// Parses raw schedule page markup and extracts its records.
///
/// Only table bodies written in the markup count. The HTML5 parser inserts
/// a `tbody` into a bare `<table><tr>`, so markup without an explicit
/// `<tbody` tag yields no records.
pub fn parse_schedule_html(html: &str) -> Vec<GameRecord> {
    if !html.to_ascii_lowercase().contains("<tbody") {
        warn!("{NO_TABLE_BODY}");
        return Vec::new();
    }
    let document = Html::parse_document(html);
    extract_game_records(&document)
}

/// Extracts one record per schedule row, in document order.
///
/// Records from all table bodies are concatenated. The date label carries
/// forward from row to row but resets at the start of each table body.
/// A document without any table body yields an empty list.
pub fn extract_game_records(document: &Html) -> Vec<GameRecord> {
    let mut records = Vec::new();
    let mut body_count = 0usize;

    for body in document.select(&TABLE_BODY) {
        body_count += 1;
        let mut current_date: Option<String> = None;

        for row in body.select(&ROW) {
            let record = extract_row(row, &mut current_date);
            debug!(
                date = record.date.as_deref().unwrap_or("-"),
                home = %record.home_team,
                "Extracted schedule row"
            );
            records.push(record);
        }
    }

    if body_count == 0 {
        warn!("{NO_TABLE_BODY}");
        return records;
    }

    debug!(
        "Extracted {} records from {} table bodies",
        records.len(),
        body_count
    );
    records
}

/// Builds the record for one row, updating the carried date when the row has its own header cell.
/// A header cell without text clears the carried date.
fn extract_row(row: ElementRef<'_>, current_date: &mut Option<String>) -> GameRecord {
    if let Some(date) = row.select(&DATE_HEADER).next().map(element_text) {
        debug!("Date header: {date:?}");
        *current_date = Some(date).filter(|d| !d.is_empty());
    }

    let home_team =
        select_text(row, &HOME_NAME).unwrap_or_else(|| sentinel::NO_GAME.to_string());
    let is_game = home_team != sentinel::NO_GAME;

    let winning_pitcher = match select_text(row, &WINNING_PITCHER) {
        Some(pitcher) => Some(pitcher),
        None if is_game => Some(sentinel::DRAW.to_string()),
        None => None,
    };

    GameRecord {
        date: current_date.clone(),
        home_team,
        away_team: select_text(row, &AWAY_NAME),
        score: row
            .select(&SCORE)
            .next()
            .map(|score| normalize_score(&element_text(score))),
        winning_pitcher,
        losing_pitcher: select_text(row, &LOSING_PITCHER),
        stadium: select_text(row, &STADIUM),
    }
}
