use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::error::ScrapeError;
use crate::fixtures::{Competition, match_id_from_url};
use crate::normalize::normalize_match;
use crate::payload::locate_match_centre;
use crate::render::PageRenderer;
use crate::store::MatchStore;

#[derive(Debug, Clone)]
pub struct CompetitionIngest {
    pub competition: Competition,
    pub addresses_total: usize,
    pub matches_scraped: usize,
    pub matches_skipped: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub addresses_total: usize,
    pub matches_scraped: usize,
    pub matches_skipped: usize,
    pub per_competition: Vec<CompetitionIngest>,
}

pub fn already_ingested(known: &HashSet<i64>, match_id: i64) -> bool {
    known.contains(&match_id)
}

/// One sequential pass over the grouped addresses. The known-id set is read
/// once up front and not refreshed mid-run, so an address repeated within the
/// run scrapes again and overwrites its own rows. No per-address failure
/// stops the pass.
pub fn ingest_matches(
    store: &MatchStore,
    renderer: &dyn PageRenderer,
    groups: &[(Competition, Vec<String>)],
    request_delay: Duration,
) -> Result<IngestSummary> {
    let known = store.known_match_ids().context("seed known match ids")?;

    let mut addresses_total = 0usize;
    let mut matches_scraped = 0usize;
    let mut matches_skipped = 0usize;
    let mut per_competition = Vec::new();

    for (competition, urls) in groups {
        let mut scraped = 0usize;
        let mut skipped = 0usize;
        let mut errors: Vec<String> = Vec::new();

        for url in urls {
            let match_id = match match_id_from_url(url) {
                Ok(id) => id,
                Err(err) => {
                    error!("{err}");
                    errors.push(err.to_string());
                    continue;
                }
            };
            if already_ingested(&known, match_id) {
                info!("Match {match_id} already exists. Skipping...");
                skipped += 1;
                continue;
            }

            info!("Scraping new match: {match_id} ({})", competition.label());
            match ingest_single_match(store, renderer, url, match_id, competition.label()) {
                Ok(()) => scraped += 1,
                Err(ScrapeError::PayloadNotFound) => {
                    warn!("MatchCentreData not found for URL: {url}");
                    errors.push(format!("match {match_id} at {url}: no match centre data"));
                }
                Err(err) => {
                    error!("Error scraping match {match_id} at {url}: {err}");
                    errors.push(format!("match {match_id} at {url}: {err}"));
                }
            }
            thread::sleep(request_delay);
        }

        addresses_total += urls.len();
        matches_scraped += scraped;
        matches_skipped += skipped;
        per_competition.push(CompetitionIngest {
            competition: *competition,
            addresses_total: urls.len(),
            matches_scraped: scraped,
            matches_skipped: skipped,
            errors,
        });
    }

    Ok(IngestSummary {
        addresses_total,
        matches_scraped,
        matches_skipped,
        per_competition,
    })
}

/// Render, locate, normalize and persist one address. A failing entity write
/// is logged and does not abort the sibling writes.
pub fn ingest_single_match(
    store: &MatchStore,
    renderer: &dyn PageRenderer,
    url: &str,
    match_id: i64,
    competition: &str,
) -> Result<(), ScrapeError> {
    let markup = renderer.render_page(url)?;
    let raw = locate_match_centre(&markup)?;
    let normalized = normalize_match(&raw, match_id, competition)?;

    if let Err(err) = store.upsert_match(&normalized.match_record) {
        error!("Error storing match {match_id}: {err}");
    }
    for team in &normalized.teams {
        if let Err(err) = store.upsert_team(team) {
            error!("Error storing team {} for match {match_id}: {err}", team.id);
        }
    }
    for player in &normalized.players {
        if let Err(err) = store.upsert_player(player) {
            error!("Error storing player {} for match {match_id}: {err}", player.id);
        }
    }
    for event in &normalized.events {
        if let Err(err) = store.upsert_event(event) {
            error!("Error storing event {} for match {match_id}: {err}", event.id);
        }
    }
    Ok(())
}
