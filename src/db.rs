use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, info};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use std::path::Path;

use crate::classifier::{classify, Category};

/// Format SQLite uses for `CURRENT_TIMESTAMP`
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// RECORDS
// ============================================================================

/// A measurement ready to be stored.
///
/// Only built from a height/weight pair, so `bmi` and `category` always
/// follow from them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBmiRecord {
    user_name: String,
    height: f64,
    weight: f64,
    bmi: f64,
    category: Category,
}

impl NewBmiRecord {
    pub fn new(user_name: &str, height: f64, weight: f64) -> Self {
        let (category, bmi) = classify(height, weight);
        Self {
            user_name: user_name.to_string(),
            height,
            weight,
            bmi,
            category,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// One stored observation, timestamped by the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiRecord {
    pub user_name: String,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl BmiRecord {
    /// True when this row holds the same measurement as `record`
    pub fn matches(&self, record: &NewBmiRecord) -> bool {
        self.user_name == record.user_name
            && self.height == record.height
            && self.weight == record.weight
            && self.bmi == record.bmi
            && self.category == record.category
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let category_str: String = row.get(4)?;
        let timestamp_str: String = row.get(5)?;

        let category = category_str
            .parse::<Category>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
        let timestamp = NaiveDateTime::parse_from_str(&timestamp_str, SQLITE_TIMESTAMP_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
            .and_utc();

        Ok(BmiRecord {
            user_name: row.get(0)?,
            height: row.get(1)?,
            weight: row.get(2)?,
            bmi: row.get(3)?,
            category,
            timestamp,
        })
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Append-only store of BMI observations keyed by user name
#[mockall::automock]
pub trait RecordStore {
    /// Append one row; the store assigns the timestamp
    fn save(&self, record: &NewBmiRecord) -> Result<()>;

    /// All rows for `user_name` in insertion order, empty if none
    fn fetch(&self, user_name: &str) -> Result<Vec<BmiRecord>>;

    /// Total number of stored rows
    fn count(&self) -> Result<i64>;
}

/// SQLite-backed store. Holds one connection for the life of the process;
/// the connection closes when the store is dropped.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        setup_database(&conn)?;
        info!("Opened BMI database at {}", path.display());
        Ok(SqliteStore { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        setup_database(&conn)?;
        Ok(SqliteStore { conn })
    }
}

impl RecordStore for SqliteStore {
    fn save(&self, record: &NewBmiRecord) -> Result<()> {
        insert_record(&self.conn, record)
    }

    fn fetch(&self, user_name: &str) -> Result<Vec<BmiRecord>> {
        get_records_for_user(&self.conn, user_name)
    }

    fn count(&self) -> Result<i64> {
        verify_count(&self.conn)
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// Create the table if it is missing. No migrations.
pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bmi_data (
            user_name TEXT,
            height REAL,
            weight REAL,
            bmi REAL,
            category TEXT,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create bmi_data table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_bmi_user_name ON bmi_data(user_name)",
        [],
    )?;

    debug!("bmi_data table ready");
    Ok(())
}

pub fn insert_record(conn: &Connection, record: &NewBmiRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO bmi_data (user_name, height, weight, bmi, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.user_name,
            record.height,
            record.weight,
            record.bmi,
            record.category.as_str(),
        ],
    )
    .with_context(|| format!("Failed to save BMI record for {:?}", record.user_name))?;

    info!(
        "Saved BMI {:.2} ({}) for {:?}",
        record.bmi, record.category, record.user_name
    );
    Ok(())
}

pub fn get_records_for_user(conn: &Connection, user_name: &str) -> Result<Vec<BmiRecord>> {
    // rowid breaks ties between rows saved within the same second
    let mut stmt = conn.prepare(
        "SELECT user_name, height, weight, bmi, category, timestamp
         FROM bmi_data
         WHERE user_name = ?1
         ORDER BY rowid ASC",
    )?;

    let records = stmt
        .query_map([user_name], BmiRecord::from_row)?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read BMI records for {:?}", user_name))?;

    debug!("Fetched {} BMI records for {:?}", records.len(), user_name);
    Ok(records)
}

pub fn verify_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM bmi_data", [], |row| row.get(0))?;

    Ok(count)
}
