//! SQLite-backed read-only view over stored activities.
//!
//! The connection is opened once per run and held for its lifetime. No
//! insert/update/delete is exposed; rows are written by a separate
//! ingestion process.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::activity::Activity;
use crate::error::Result;

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/data.db";

/// Read-only accessor over the `activities` table.
pub struct ActivityStore {
    db: Connection,
    select_all: bool,
}

impl ActivityStore {
    /// Open (creating if necessary) the activity database.
    ///
    /// `path` defaults to [`DEFAULT_DB_PATH`]. With `select_all` false,
    /// [`list`](Self::list) returns only the 10 most recent records.
    pub fn open(path: Option<&Path>, select_all: bool) -> Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_DB_PATH));
        let db = Connection::open(path)?;
        Self::init_schema(&db)?;
        debug!("opened activity store at {}", path.display());
        Ok(Self { db, select_all })
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory(select_all: bool) -> Result<Self> {
        let db = Connection::open_in_memory()?;
        Self::init_schema(&db)?;
        Ok(Self { db, select_all })
    }

    /// Initialize the database schema. No-op when the table already exists.
    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS activities (
                run_id INTEGER PRIMARY KEY,
                distance REAL NOT NULL,
                moving_time TEXT NOT NULL,
                start_date TEXT NOT NULL,
                summary_polyline TEXT NOT NULL,
                average_speed REAL
            );
            "#,
        )
    }

    /// List stored activities, newest first.
    ///
    /// "Newest" means largest `run_id`, not timestamp order. Without
    /// `select_all` at most the 10 highest ids are returned. An empty
    /// store yields an empty vec.
    pub fn list(&self) -> Result<Vec<Activity>> {
        let sql = if self.select_all {
            "SELECT run_id, distance, moving_time, start_date, summary_polyline, average_speed
             FROM activities
             ORDER BY run_id DESC"
        } else {
            "SELECT run_id, distance, moving_time, start_date, summary_polyline, average_speed
             FROM activities
             ORDER BY run_id DESC
             LIMIT 10"
        };

        let mut stmt = self.db.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(Activity {
                id: row.get(0)?,
                distance: row.get(1)?,
                moving_time: row.get(2)?,
                start_date: row.get(3)?,
                summary_polyline: row.get(4)?,
                average_speed: row.get(5)?,
            })
        })?;

        let mut activities = Vec::new();
        for row in rows {
            activities.push(row?);
        }
        debug!("listed {} activities", activities.len());
        Ok(activities)
    }
}
