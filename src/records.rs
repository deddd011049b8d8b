/// One row per scraped match, keyed by the identifier derived from the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: i64,
    pub competition: String,
    pub date: Option<String>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_score_fulltime: i64,
    pub away_score_fulltime: i64,
    pub home_shots_total: i64,
    pub away_shots_total: i64,
}

/// Latest-seen record per team; re-observing a team under another competition
/// overwrites the previous row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub country_name: String,
    pub competition: String,
}

/// One row per (player, match) appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: String,
    pub player_id: i64,
    pub name: String,
    pub team_id: i64,
    pub competition: String,
    pub match_id: i64,
}

impl PlayerRecord {
    pub fn composite_id(player_id: i64, match_id: i64) -> String {
        format!("{player_id}_{match_id}")
    }
}

/// One row per (match, event) pair. Events reported without an `eventId` share
/// the bare `"{match_id}_"` key, so the last one seen wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: String,
    pub match_id: i64,
    pub event_type: Option<String>,
    pub minute: Option<i64>,
}

impl EventRecord {
    pub fn composite_id(match_id: i64, event_id: Option<i64>) -> String {
        match event_id {
            Some(event_id) => format!("{match_id}_{event_id}"),
            None => format!("{match_id}_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EventRecord, PlayerRecord};

    #[test]
    fn player_ids_are_unique_per_match_pair() {
        assert_eq!(PlayerRecord::composite_id(10, 999), "10_999");
        // Two players in one match, one player across two matches.
        assert_ne!(
            PlayerRecord::composite_id(10, 999),
            PlayerRecord::composite_id(11, 999)
        );
        assert_ne!(
            PlayerRecord::composite_id(10, 999),
            PlayerRecord::composite_id(10, 1000)
        );
    }

    #[test]
    fn event_ids_compose_match_first() {
        assert_eq!(EventRecord::composite_id(999, Some(5)), "999_5");
        assert_eq!(EventRecord::composite_id(999, None), "999_");
    }
}
