use std::env;
use std::time::Duration;

use log::warn;

use crate::fixtures::Competition;

const DEFAULT_FIXTURES_URL: &str = "https://www.whoscored.com/Teams/65/Fixtures/Spain-Barcelona";
const DEFAULT_DB_PATH: &str = "matchcentre.sqlite";
const DEFAULT_REQUEST_DELAY_SECS: u64 = 2;

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub fixtures_url: String,
    pub db_path: String,
    pub request_delay: Duration,
    pub competitions: Vec<Competition>,
}

impl ScrapeConfig {
    pub fn from_env() -> Self {
        let fixtures_url = env::var("FIXTURES_URL")
            .unwrap_or_else(|_| DEFAULT_FIXTURES_URL.to_string())
            .trim()
            .to_string();
        let db_path = env::var("MATCH_DB_PATH")
            .unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
            .trim()
            .to_string();
        let delay_secs = env::var("REQUEST_DELAY_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_DELAY_SECS);
        let competitions = parse_competitions(env::var("SCRAPE_COMPETITIONS").ok().as_deref());

        Self {
            fixtures_url,
            db_path,
            request_delay: Duration::from_secs(delay_secs),
            competitions,
        }
    }
}

fn parse_competitions(raw: Option<&str>) -> Vec<Competition> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Competition::ALL.to_vec();
    };
    let mut selected = Vec::new();
    for key in raw.split(',') {
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        match Competition::from_key(key) {
            Some(competition) => {
                if !selected.contains(&competition) {
                    selected.push(competition);
                }
            }
            None => warn!("unknown competition {key:?} in SCRAPE_COMPETITIONS, ignoring"),
        }
    }
    if selected.is_empty() {
        warn!("SCRAPE_COMPETITIONS selected nothing, falling back to all competitions");
        return Competition::ALL.to_vec();
    }
    selected
}
