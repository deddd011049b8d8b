use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ScrapeError;
use crate::records::{EventRecord, MatchRecord, PlayerRecord, TeamRecord};
use crate::stats::sum_stats;

// A side missing teamId, name, countryName, scores, stats or players is a
// structural failure for the whole address; the optional fields below default
// instead of failing.
#[derive(Debug, Deserialize)]
struct MatchCentrePayload {
    #[serde(rename = "startTime", default)]
    start_time: Option<String>,
    home: SidePayload,
    away: SidePayload,
    #[serde(default)]
    events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
struct SidePayload {
    #[serde(rename = "teamId")]
    team_id: i64,
    name: String,
    #[serde(rename = "countryName")]
    country_name: String,
    scores: ScoresEntry,
    stats: SideStats,
    players: Vec<PlayerEntry>,
}

#[derive(Debug, Deserialize)]
struct ScoresEntry {
    #[serde(default)]
    fulltime: i64,
}

#[derive(Debug, Deserialize)]
struct SideStats {
    #[serde(rename = "shotsTotal", default)]
    shots_total: HashMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct PlayerEntry {
    #[serde(rename = "playerId")]
    player_id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct EventEntry {
    #[serde(rename = "eventId", default)]
    event_id: Option<i64>,
    #[serde(rename = "type", default)]
    kind: Option<EventType>,
    #[serde(default)]
    minute: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct EventType {
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

/// Everything one address normalizes into, consumed as a unit by the store.
#[derive(Debug)]
pub struct NormalizedMatch {
    pub match_record: MatchRecord,
    pub teams: [TeamRecord; 2],
    pub players: Vec<PlayerRecord>,
    pub events: Vec<EventRecord>,
}

pub fn normalize_match(
    raw: &str,
    match_id: i64,
    competition: &str,
) -> Result<NormalizedMatch, ScrapeError> {
    let payload: MatchCentrePayload = serde_json::from_str(raw.trim())?;
    let home = &payload.home;
    let away = &payload.away;

    let match_record = MatchRecord {
        id: match_id,
        competition: competition.to_string(),
        date: payload.start_time.clone(),
        home_team_id: home.team_id,
        away_team_id: away.team_id,
        home_team_name: home.name.clone(),
        away_team_name: away.name.clone(),
        home_score_fulltime: home.scores.fulltime,
        away_score_fulltime: away.scores.fulltime,
        home_shots_total: sum_stats(&home.stats.shots_total, &[]),
        away_shots_total: sum_stats(&away.stats.shots_total, &[]),
    };

    let teams = [
        TeamRecord {
            id: home.team_id,
            name: home.name.clone(),
            country_name: home.country_name.clone(),
            competition: competition.to_string(),
        },
        TeamRecord {
            id: away.team_id,
            name: away.name.clone(),
            country_name: away.country_name.clone(),
            competition: competition.to_string(),
        },
    ];

    let mut players = Vec::with_capacity(home.players.len() + away.players.len());
    for side in [home, away] {
        for player in &side.players {
            players.push(PlayerRecord {
                id: PlayerRecord::composite_id(player.player_id, match_id),
                player_id: player.player_id,
                name: player.name.clone(),
                team_id: side.team_id,
                competition: competition.to_string(),
                match_id,
            });
        }
    }

    let events = payload
        .events
        .iter()
        .map(|event| EventRecord {
            id: EventRecord::composite_id(match_id, event.event_id),
            match_id,
            event_type: event.kind.as_ref().and_then(|kind| kind.display_name.clone()),
            minute: event.minute,
        })
        .collect();

    Ok(NormalizedMatch {
        match_record,
        teams,
        players,
        events,
    })
}
