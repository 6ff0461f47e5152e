//! SQLite history of every quote the server handed out.
//!
//! The connection is opened once at startup and shared by all requests. Each insert
//! runs on tokio's blocking pool and is bounded by its own timeout; when the bound is
//! exceeded the running statement is interrupted through SQLite's interrupt handle and
//! the caller gets `QuoteError::Timeout`.
//!
//! The table keeps its legacy Portuguese column names so existing history
//! files stay readable:
//!
//! ```sql
//! CREATE TABLE cotacao_data (id, moeda, cotacao, timestamp)
//! ```
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use quote_common::{Currency, Quote, QuoteError, Result};
use rusqlite::{Connection, InterruptHandle, params};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Name of the history table.
pub const TABLE_NAME: &str = "cotacao_data";

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS cotacao_data (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        moeda TEXT NOT NULL,
        cotacao TEXT NOT NULL,
        timestamp DATETIME NOT NULL
    )";

const INSERT_SQL: &str = "INSERT INTO cotacao_data (moeda, cotacao, timestamp) VALUES (?1, ?2, ?3)";

/// One persisted row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredQuote {
    pub id: i64,
    pub currency: Currency,
    pub bid: String,
    pub timestamp: DateTime<Utc>,
}

/// Shared handle on the history database.
#[derive(Clone)]
pub struct QuoteStore {
    conn: Arc<Mutex<Connection>>,
    interrupt: Arc<InterruptHandle>,
    timeout: Duration,
}

impl QuoteStore {
    /// Open (or create) the history file at `path` and make sure the table exists.
    pub fn open(path: impl AsRef<Path>, timeout: Duration) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening quote history at {}", path.display());
        let conn = Connection::open(path)?;
        Self::init(conn, timeout)
    }

    /// Same as [`QuoteStore::open`] over a private in-memory database.
    pub fn open_in_memory(timeout: Duration) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, timeout)
    }

    fn init(conn: Connection, timeout: Duration) -> Result<Self> {
        // Lock contention from other processes counts against the same bound.
        conn.busy_timeout(timeout)?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        conn.execute_batch(CREATE_TABLE_SQL)?;
        let interrupt = Arc::new(conn.get_interrupt_handle());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            interrupt,
            timeout,
        })
    }

    /// Append one `USD` row for `quote` stamped with the current time.
    ///
    /// Returns the id of the new row.
    pub async fn insert(&self, quote: &Quote) -> Result<i64> {
        let conn = Arc::clone(&self.conn);
        let bid = quote.bid().to_string();
        let abandoned = Arc::new(AtomicBool::new(false));
        let task_abandoned = Arc::clone(&abandoned);

        let task = tokio::task::spawn_blocking(move || -> Result<i64> {
            let conn = conn.lock()?;
            if task_abandoned.load(Ordering::SeqCst) {
                return Err(QuoteError::Task("insert abandoned before it started".to_string()));
            }
            conn.execute(INSERT_SQL, params![Currency::USD.to_string(), bid, Utc::now()])?;
            Ok(conn.last_insert_rowid())
        });

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => {
                if let Ok(id) = &result {
                    debug!("Inserted quote row {}", id);
                }
                result
            }
            Ok(Err(join_err)) => Err(QuoteError::Task(join_err.to_string())),
            Err(_) => {
                abandoned.store(true, Ordering::SeqCst);
                self.interrupt.interrupt();
                warn!("Insert exceeded {:?}, statement interrupted", self.timeout);
                Err(QuoteError::Timeout {
                    operation: "database insert",
                    after: self.timeout,
                })
            }
        }
    }

    /// Number of rows in the history.
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cotacao_data", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// The `limit` most recent rows, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<StoredQuote>> {
        let conn = self.conn.lock()?;
        // CAST keeps bids readable from files created with a DECIMAL column.
        let mut stmt = conn.prepare(
            "SELECT id, moeda, CAST(cotacao AS TEXT), timestamp
             FROM cotacao_data ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            let id: i64 = row.get(0)?;
            let currency: String = row.get(1)?;
            let bid: String = row.get(2)?;
            let timestamp: DateTime<Utc> = row.get(3)?;
            Ok((id, currency, bid, timestamp))
        })?;

        let mut quotes = Vec::new();
        for row in rows {
            let (id, currency, bid, timestamp) = row?;
            let currency = currency
                .parse::<Currency>()
                .map_err(|e| QuoteError::Config(format!("unknown currency {} in row {}: {}", currency, id, e)))?;
            quotes.push(StoredQuote {
                id,
                currency,
                bid,
                timestamp,
            });
        }
        Ok(quotes)
    }
}
