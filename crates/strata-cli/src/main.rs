//! `strata` — demo of versioned record storage against a sample database.
//!
//! Creates `SAMPLE_TABLE`, then walks one record through its lifecycle
//! inside a single transaction — insert, update, delete — printing the full
//! table after each step so the version chain is visible.
//!
//! # Usage
//!
//! ```
//! strata                       # in-memory database, user "demo"
//! strata --db invoices.db --user alice
//! strata --config strata.toml
//! ```

mod render;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rusqlite::Connection;
use serde::Deserialize;
use strata_core::{FieldValues, Statement, StatementExecutor as _, Value};
use strata_store_sqlite::{SqliteExecutor, versioned_store};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "strata", about = "Versioned record storage demo")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "strata.toml")]
  config: PathBuf,

  /// Database file; omit to run against an in-memory database.
  #[arg(long)]
  db: Option<PathBuf>,

  /// User identity stamped into the audit columns.
  #[arg(long)]
  user: Option<String>,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Shape of the optional config file / `STRATA_*` environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
struct Settings {
  db_path: Option<PathBuf>,
  user:    Option<String>,
}

// ─── Sample database ──────────────────────────────────────────────────────────

/// The versioned-table schema contract plus the invoice domain columns.
const SAMPLE_SCHEMA: &str = "
DROP TABLE IF EXISTS SAMPLE_TABLE;

CREATE TABLE SAMPLE_TABLE (
    RECORD_ID      INTEGER PRIMARY KEY,
    PREV_RECORD_ID INTEGER,
    IS_ACTIVE      INTEGER NOT NULL,
    CREATED_BY     TEXT NOT NULL,
    CREATED_DATE   DATETIME NOT NULL,
    DELETED_BY     TEXT,
    DELETED_DATE   DATETIME,
    INVOICE_NO     TEXT NOT NULL,
    SUPPLIER       TEXT NOT NULL,
    PRICE          REAL NOT NULL,
    WEIGHT         REAL NOT NULL
);
";

fn open_database(path: Option<&PathBuf>) -> anyhow::Result<Connection> {
  let conn = match path {
    Some(p) => Connection::open(p)
      .with_context(|| format!("failed to open database at {}", p.display()))?,
    None => Connection::open_in_memory().context("in-memory database")?,
  };
  conn
    .execute_batch(SAMPLE_SCHEMA)
    .context("failed to create SAMPLE_TABLE")?;
  Ok(conn)
}

fn invoice(supplier: &str, price: f64) -> FieldValues {
  FieldValues::from([
    ("INVOICE_NO".to_owned(), Value::from("2017-0001")),
    ("SUPPLIER".to_owned(), Value::from(supplier)),
    ("PRICE".to_owned(), Value::from(price)),
    ("WEIGHT".to_owned(), Value::from(850.0)),
  ])
}

fn dump_sample_table(executor: &SqliteExecutor<'_>) -> anyhow::Result<()> {
  let query = Statement::new("select * from SAMPLE_TABLE order by RECORD_ID")?;
  let table = executor.query_rows(&query, None)?;
  println!("{}", render::format_table(&table));
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration; CLI flags override file and environment.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("STRATA"))
    .build()
    .context("failed to read config")?;
  let settings: Settings = settings
    .try_deserialize()
    .context("failed to deserialise settings")?;

  let db_path = cli.db.or(settings.db_path);
  let user = cli
    .user
    .or(settings.user)
    .unwrap_or_else(|| "demo".to_owned());

  let mut conn = open_database(db_path.as_ref())?;
  tracing::info!(
    db = %db_path
      .as_deref()
      .map_or_else(|| ":memory:".to_owned(), |p| p.display().to_string()),
    %user,
    "sample database ready"
  );

  let tx = conn.transaction().context("failed to begin transaction")?;
  {
    let store =
      versioned_store(&tx, &user).context("failed to assemble store")?;

    let first = store
      .insert("SAMPLE_TABLE", &invoice("ACME LLC.", 1200.0))
      .context("insert failed")?;
    println!("Inserted record version {first}:");
    dump_sample_table(store.executor())?;

    let second = store
      .update("SAMPLE_TABLE", first, &invoice("ACME LTD.", 12000.0))
      .context("update failed")?;
    println!();
    println!("Version {first} superseded by version {second}:");
    dump_sample_table(store.executor())?;

    store
      .delete("SAMPLE_TABLE", second)
      .context("delete failed")?;
    println!();
    println!("Version {second} deleted:");
    dump_sample_table(store.executor())?;
  }

  tx.commit().context("failed to commit transaction")?;
  tracing::info!("transaction committed");

  Ok(())
}
