use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::FromSql;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::ScrapeError;
use crate::records::{EventRecord, MatchRecord, PlayerRecord, TeamRecord};

/// SQLite-backed store with one table per record kind. Every write is an
/// upsert keyed on the record id, so replaying an address rewrites the same
/// rows instead of growing the tables.
pub struct MatchStore {
    conn: Connection,
}

impl MatchStore {
    pub fn open(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(path).with_context(|| format!("open sqlite db {path}"))?;
        init_schema(&conn)?;
        Ok(MatchStore { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory sqlite db")?;
        init_schema(&conn)?;
        Ok(MatchStore { conn })
    }

    /// Ids of every match already persisted. Read once at the start of a run;
    /// the run tracks its own additions in memory after that.
    pub fn known_match_ids(&self) -> Result<HashSet<i64>, ScrapeError> {
        self.id_set("SELECT id FROM matches")
    }

    pub fn team_ids(&self) -> Result<HashSet<i64>, ScrapeError> {
        self.id_set("SELECT id FROM teams")
    }

    pub fn player_ids(&self) -> Result<HashSet<String>, ScrapeError> {
        self.id_set("SELECT id FROM players")
    }

    pub fn event_ids(&self) -> Result<HashSet<String>, ScrapeError> {
        self.id_set("SELECT id FROM events")
    }

    fn id_set<T: FromSql + Eq + Hash>(&self, sql: &str) -> Result<HashSet<T>, ScrapeError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, T>(0))?;
        let mut ids = HashSet::new();
        for id in rows {
            ids.insert(id?);
        }
        Ok(ids)
    }

    pub fn upsert_match(&self, record: &MatchRecord) -> Result<(), ScrapeError> {
        self.conn.execute(
            "INSERT INTO matches (id, competition, date, home_team_id, away_team_id, \
             home_team_name, away_team_name, home_score_fulltime, away_score_fulltime, \
             home_shots_total, away_shots_total) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
             ON CONFLICT(id) DO UPDATE SET \
             competition = excluded.competition, \
             date = excluded.date, \
             home_team_id = excluded.home_team_id, \
             away_team_id = excluded.away_team_id, \
             home_team_name = excluded.home_team_name, \
             away_team_name = excluded.away_team_name, \
             home_score_fulltime = excluded.home_score_fulltime, \
             away_score_fulltime = excluded.away_score_fulltime, \
             home_shots_total = excluded.home_shots_total, \
             away_shots_total = excluded.away_shots_total",
            params![
                record.id,
                record.competition,
                record.date,
                record.home_team_id,
                record.away_team_id,
                record.home_team_name,
                record.away_team_name,
                record.home_score_fulltime,
                record.away_score_fulltime,
                record.home_shots_total,
                record.away_shots_total,
            ],
        )?;
        Ok(())
    }

    pub fn upsert_team(&self, record: &TeamRecord) -> Result<(), ScrapeError> {
        self.conn.execute(
            "INSERT INTO teams (id, name, country_name, competition) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(id) DO UPDATE SET \
             name = excluded.name, \
             country_name = excluded.country_name, \
             competition = excluded.competition",
            params![record.id, record.name, record.country_name, record.competition],
        )?;
        Ok(())
    }

    pub fn upsert_player(&self, record: &PlayerRecord) -> Result<(), ScrapeError> {
        self.conn.execute(
            "INSERT INTO players (id, player_id, name, team_id, competition, match_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT(id) DO UPDATE SET \
             player_id = excluded.player_id, \
             name = excluded.name, \
             team_id = excluded.team_id, \
             competition = excluded.competition, \
             match_id = excluded.match_id",
            params![
                record.id,
                record.player_id,
                record.name,
                record.team_id,
                record.competition,
                record.match_id,
            ],
        )?;
        Ok(())
    }

    pub fn upsert_event(&self, record: &EventRecord) -> Result<(), ScrapeError> {
        self.conn.execute(
            "INSERT INTO events (id, match_id, event_type, minute) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(id) DO UPDATE SET \
             match_id = excluded.match_id, \
             event_type = excluded.event_type, \
             minute = excluded.minute",
            params![record.id, record.match_id, record.event_type, record.minute],
        )?;
        Ok(())
    }

    pub fn load_match(&self, id: i64) -> Result<Option<MatchRecord>, ScrapeError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, competition, date, home_team_id, away_team_id, home_team_name, \
                 away_team_name, home_score_fulltime, away_score_fulltime, home_shots_total, \
                 away_shots_total FROM matches WHERE id = ?1",
                params![id],
                |row| {
                    Ok(MatchRecord {
                        id: row.get(0)?,
                        competition: row.get(1)?,
                        date: row.get(2)?,
                        home_team_id: row.get(3)?,
                        away_team_id: row.get(4)?,
                        home_team_name: row.get(5)?,
                        away_team_name: row.get(6)?,
                        home_score_fulltime: row.get(7)?,
                        away_score_fulltime: row.get(8)?,
                        home_shots_total: row.get(9)?,
                        away_shots_total: row.get(10)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn load_team(&self, id: i64) -> Result<Option<TeamRecord>, ScrapeError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, name, country_name, competition FROM teams WHERE id = ?1",
                params![id],
                |row| {
                    Ok(TeamRecord {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        country_name: row.get(2)?,
                        competition: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn load_player(&self, id: &str) -> Result<Option<PlayerRecord>, ScrapeError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, player_id, name, team_id, competition, match_id \
                 FROM players WHERE id = ?1",
                params![id],
                |row| {
                    Ok(PlayerRecord {
                        id: row.get(0)?,
                        player_id: row.get(1)?,
                        name: row.get(2)?,
                        team_id: row.get(3)?,
                        competition: row.get(4)?,
                        match_id: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn load_event(&self, id: &str) -> Result<Option<EventRecord>, ScrapeError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, match_id, event_type, minute FROM events WHERE id = ?1",
                params![id],
                |row| {
                    Ok(EventRecord {
                        id: row.get(0)?,
                        match_id: row.get(1)?,
                        event_type: row.get(2)?,
                        minute: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY,
            competition TEXT NOT NULL,
            date TEXT NULL,
            home_team_id INTEGER NOT NULL,
            away_team_id INTEGER NOT NULL,
            home_team_name TEXT NOT NULL,
            away_team_name TEXT NOT NULL,
            home_score_fulltime INTEGER NOT NULL,
            away_score_fulltime INTEGER NOT NULL,
            home_shots_total INTEGER NOT NULL,
            away_shots_total INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            country_name TEXT NOT NULL,
            competition TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS players (
            id TEXT PRIMARY KEY,
            player_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            team_id INTEGER NOT NULL,
            competition TEXT NOT NULL,
            match_id INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY,
            match_id INTEGER NOT NULL,
            event_type TEXT NULL,
            minute INTEGER NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}
