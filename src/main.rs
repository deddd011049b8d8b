use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use matchcentre_ingest::config::ScrapeConfig;
use matchcentre_ingest::fixtures::{discover_match_urls, group_by_competition};
use matchcentre_ingest::ingest::ingest_matches;
use matchcentre_ingest::render::{HttpRenderer, PageRenderer};
use matchcentre_ingest::store::MatchStore;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename("config.env");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ScrapeConfig::from_env();
    let store = MatchStore::open(&config.db_path)?;

    let renderer = HttpRenderer;
    let markup = renderer
        .render_page(&config.fixtures_url)
        .context("render fixtures page")?;
    let urls = discover_match_urls(&markup);
    let groups = group_by_competition(&urls, &config.competitions);

    let summary = ingest_matches(&store, &renderer, &groups, config.request_delay)?;
    info!("Scraping completed successfully.");

    println!("Match centre ingest complete");
    println!("DB: {}", config.db_path);
    println!(
        "Addresses: {} (scraped {}, skipped {})",
        summary.addresses_total, summary.matches_scraped, summary.matches_skipped
    );
    for item in &summary.per_competition {
        println!(
            "{}: addresses {} scraped={} skipped={}",
            item.competition.label(),
            item.addresses_total,
            item.matches_scraped,
            item.matches_skipped
        );
        if !item.errors.is_empty() {
            println!("  errors: {}", item.errors.len());
            for err in item.errors.iter().take(6) {
                println!("   - {err}");
            }
        }
    }

    Ok(())
}
