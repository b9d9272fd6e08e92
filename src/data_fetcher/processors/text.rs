//! Text extraction helpers shared by the page processors

use scraper::{ElementRef, Selector};

/// Concatenated descendant text of an element, trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`, if any.
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}

/// Normalizes a score cell: trims it, then drops every space and newline.
///
/// The page renders scores across several lines (`3\n-\n2`), so this also
/// removes whitespace between the digits and the separator.
pub fn normalize_score(raw: &str) -> String {
    raw.trim().chars().filter(|c| !matches!(c, '\n' | ' ')).collect()
}
