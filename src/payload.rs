use scraper::{Html, Selector};

use crate::error::ScrapeError;

// The match centre blob is not addressable markup: it sits inside an inline
// script as a `matchCentreData: {...},` member of a larger config literal, so
// it is located by marker substring and cut at the first line-terminated comma,
// the member boundary the page's own script uses. Upstream format drift lands
// in this function and nowhere else.
const MARKER: &str = "matchCentreData: ";

/// Pull the raw match centre JSON out of rendered page markup.
pub fn locate_match_centre(markup: &str) -> Result<String, ScrapeError> {
    let document = Html::parse_document(markup);
    let Ok(selector) = Selector::parse("script") else {
        return Err(ScrapeError::PayloadNotFound);
    };

    for script in document.select(&selector) {
        let text: String = script.text().collect();
        let Some(start) = text.find(MARKER) else {
            continue;
        };
        let after = &text[start + MARKER.len()..];
        let raw = match after.find(",\n") {
            Some(end) => &after[..end],
            None => after,
        };
        return Ok(raw.trim().to_string());
    }

    Err(ScrapeError::PayloadNotFound)
}
