use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error, Result};
use rusqlite::{Connection, OpenFlags, params};

use crate::models::{Article, Author, LogEntry};

pub const AUTHORS_TABLE: &str = "authors";
pub const ARTICLES_TABLE: &str = "articles";
pub const LOG_TABLE: &str = "log";

const CREATE_AUTHORS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
"#;

const CREATE_ARTICLES_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS articles (
    id INTEGER PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    author INTEGER NOT NULL REFERENCES authors(id)
);
"#;

const CREATE_LOG_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS log (
    id INTEGER PRIMARY KEY,
    path TEXT NOT NULL,
    status TEXT NOT NULL,
    time TEXT NOT NULL
);
"#;

const CREATE_INDEX_LOG_PATH_STATUS_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_log_path_status
ON log (path, status);
"#;

const CREATE_INDEX_LOG_TIME_SQL: &str = r#"
CREATE INDEX IF NOT EXISTS idx_log_time
ON log (time);
"#;

#[must_use]
pub fn schema_statements() -> &'static [&'static str] {
    &[
        CREATE_AUTHORS_TABLE_SQL,
        CREATE_ARTICLES_TABLE_SQL,
        CREATE_LOG_TABLE_SQL,
        CREATE_INDEX_LOG_PATH_STATUS_SQL,
        CREATE_INDEX_LOG_TIME_SQL,
    ]
}

#[must_use]
pub fn create_schema_sql() -> String {
    schema_statements().join("\n")
}

/// The one classified error kind of the report path: the database file is
/// missing, unreadable, or not a database. `main` downcasts to this to decide
/// the user-facing message.
#[derive(Debug)]
pub struct ConnectionFailure {
    pub database: PathBuf,
    pub cause: String,
}

impl fmt::Display for ConnectionFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unable to connect to database {}: {}",
            self.database.display(),
            self.cause
        )
    }
}

impl std::error::Error for ConnectionFailure {}

/// Opens the news database for a report section. Read-only and without
/// create: a missing file is a connection failure, never a silently created
/// empty database.
pub fn open_database(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|error| {
        Error::new(ConnectionFailure {
            database: path.to_path_buf(),
            cause: error.to_string(),
        })
    })
}

/// Creates a schema-complete database file. Fixture/seed tooling only; the
/// production store is externally seeded and the report path never runs DDL.
pub fn create_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!(
                "failed to create database parent directory: {}",
                parent.display()
            )
        })?;
    }

    let connection = Connection::open(path)
        .with_context(|| format!("failed to create database: {}", path.display()))?;
    ensure_schema(&connection)?;
    Ok(connection)
}

pub fn ensure_schema(connection: &Connection) -> Result<()> {
    connection
        .execute_batch(&create_schema_sql())
        .context("failed to create news schema")
}

pub fn insert_author(connection: &Connection, author: &Author) -> Result<()> {
    connection
        .execute(
            "INSERT INTO authors (id, name) VALUES (?1, ?2)",
            params![author.id, author.name],
        )
        .with_context(|| format!("failed to insert author id={}", author.id))?;
    Ok(())
}

pub fn insert_article(connection: &Connection, article: &Article) -> Result<()> {
    connection
        .execute(
            "INSERT INTO articles (id, slug, title, author) VALUES (?1, ?2, ?3, ?4)",
            params![article.id, article.slug, article.title, article.author],
        )
        .with_context(|| format!("failed to insert article slug={}", article.slug))?;
    Ok(())
}

pub fn insert_log_entry(connection: &Connection, entry: &LogEntry) -> Result<()> {
    connection
        .execute(
            "INSERT INTO log (path, status, time) VALUES (?1, ?2, ?3)",
            params![entry.path, entry.status, entry.time],
        )
        .with_context(|| format!("failed to insert log row path={}", entry.path))?;
    Ok(())
}
