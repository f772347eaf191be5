//! SQL DDL for initializing the lead store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `id` TEXT primary key (application-generated UUID v4)
/// - `created_at`/`updated_at` defaulted server-side to UTC RFC3339
/// - `submitted_at` supplied by the client (server-now fallback)
/// - `session_id` optional analytics correlation string
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS leads (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    industry TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now')),
    submitted_at TEXT NOT NULL,
    session_id TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_leads_email ON leads(email);
"#;
