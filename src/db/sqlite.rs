use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::db::models::{Lead, NewLead};
use crate::db::schema::SQLITE_INIT;
use crate::error::LeadError;
use crate::types::lead::Industry;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the database behind `database_url` and apply
/// the bundled DDL.
pub async fn connect(database_url: &str) -> Result<LeadStorage, LeadError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    let storage = LeadStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct LeadStorage {
    pool: SqlitePool,
}

impl LeadStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), LeadError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one lead and return the stored row, including the
    /// server-assigned timestamps. Plain insert; duplicate submissions
    /// create independent rows.
    pub async fn insert(&self, lead: NewLead) -> Result<Lead, LeadError> {
        sqlx::query(
            r#"
            INSERT INTO leads (id, name, email, industry, submitted_at, session_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(lead.id.to_string())
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(lead.industry.as_str())
        .bind(lead.submitted_at.to_rfc3339())
        .bind(&lead.session_id)
        .execute(&self.pool)
        .await?;

        self.get_by_id(lead.id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Lead, LeadError> {
        let row = sqlx::query(
            r#"SELECT id, name, email, industry, created_at, updated_at, submitted_at, session_id
               FROM leads WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await?;
        Self::row_to_model(row)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Lead>, LeadError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, industry, created_at, updated_at, submitted_at, session_id
               FROM leads ORDER BY created_at DESC, id LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn count(&self) -> Result<i64, LeadError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_model(row: SqliteRow) -> Result<Lead, LeadError> {
        let id_str: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let industry_str: String = row.try_get("industry")?;
        let created_str: String = row.try_get("created_at")?;
        let updated_str: String = row.try_get("updated_at")?;
        let submitted_str: String = row.try_get("submitted_at")?;
        let session_id: Option<String> = row.try_get("session_id")?;

        let id = Uuid::parse_str(&id_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let industry =
            Industry::from_str(&industry_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Lead {
            id,
            name,
            email,
            industry,
            created_at: parse_utc(&created_str)?,
            updated_at: parse_utc(&updated_str)?,
            submitted_at: parse_utc(&submitted_str)?,
            session_id,
        })
    }
}

fn parse_utc(s: &str) -> Result<DateTime<Utc>, LeadError> {
    Ok(DateTime::parse_from_rfc3339(s)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc))
}
