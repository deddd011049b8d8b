use std::collections::HashSet;

use log::debug;
use scraper::{Html, Selector};

use crate::error::ScrapeError;

const WHOSCORED_BASE: &str = "https://www.whoscored.com";

/// Competitions recognized in match addresses, keyed by the path token the
/// site embeds in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competition {
    LaLiga,
    ChampionsLeague,
    Supercopa,
}

impl Competition {
    pub const ALL: [Competition; 3] = [
        Competition::LaLiga,
        Competition::ChampionsLeague,
        Competition::Supercopa,
    ];

    /// Label stored on every record scraped under this competition.
    pub fn label(self) -> &'static str {
        match self {
            Competition::LaLiga => "La Liga",
            Competition::ChampionsLeague => "Champions League",
            Competition::Supercopa => "Supercopa",
        }
    }

    pub fn url_token(self) -> &'static str {
        match self {
            Competition::LaLiga => "LaLiga",
            Competition::ChampionsLeague => "Champions-League",
            Competition::Supercopa => "Spain-Supercopa-de-Espana",
        }
    }

    /// Accepts either the label or the url token, case-insensitively. Used
    /// for the competition filter in the environment config.
    pub fn from_key(key: &str) -> Option<Competition> {
        let key = key.trim();
        Competition::ALL
            .iter()
            .copied()
            .find(|competition| {
                key.eq_ignore_ascii_case(competition.label())
                    || key.eq_ignore_ascii_case(competition.url_token())
            })
    }

    pub fn classify(url: &str) -> Option<Competition> {
        Competition::ALL
            .iter()
            .copied()
            .find(|competition| url.contains(competition.url_token()))
    }
}

/// Collects every `/Live/` anchor from the fixtures page, absolutized and
/// deduplicated preserving first-seen order.
pub fn discover_match_urls(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let Ok(selector) = Selector::parse(r#"a[href*="/Live/"]"#) else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let url = if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{WHOSCORED_BASE}{href}")
        };
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }
    urls
}

/// Groups addresses by competition, preserving the order of `competitions`
/// and the discovery order within each group. Addresses matching no known
/// competition are excluded from every group.
pub fn group_by_competition(
    urls: &[String],
    competitions: &[Competition],
) -> Vec<(Competition, Vec<String>)> {
    let mut groups: Vec<(Competition, Vec<String>)> = competitions
        .iter()
        .map(|&competition| (competition, Vec::new()))
        .collect();
    for url in urls {
        match Competition::classify(url) {
            Some(competition) => {
                if let Some((_, group)) = groups
                    .iter_mut()
                    .find(|(candidate, _)| *candidate == competition)
                {
                    group.push(url.clone());
                }
            }
            None => debug!("no recognized competition in address {url}"),
        }
    }
    groups
}

/// Derives the numeric match id from an address, i.e. the integer segment
/// after `Matches/` in `.../Matches/1821372/Live/...`.
pub fn match_id_from_url(url: &str) -> Result<i64, ScrapeError> {
    let Some(rest) = url.split("Matches/").nth(1) else {
        return Err(ScrapeError::BadAddress(url.to_string()));
    };
    let digits: String = rest.chars().take_while(|ch| ch.is_ascii_digit()).collect();
    digits
        .parse::<i64>()
        .map_err(|_| ScrapeError::BadAddress(url.to_string()))
}
