// src/db/schema.rs
// DOCUMENTATION: Schema creation and startup seeding
// PURPOSE: Create tables on startup and seed initial companies

use crate::db::CompanyRepository;
use crate::errors::FeedbackError;
use sqlx::SqlitePool;

/// Companies inserted when the database starts out empty
const SEED_COMPANIES: [(&str, &str); 3] = [
    ("Alpha Tech DB", "Technology"),
    ("Beta Consulting DB", "Consulting"),
    ("Gamma Retail DB", "Retail"),
];

/// Create tables and indexes if they do not exist yet
/// DOCUMENTATION: Called once during application startup in main.rs
/// Idempotent; there is no migration framework
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            industry TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_company_name ON company (name)")
        .execute(pool)
        .await?;

    // company_id is nullable here; creation requires it and the service
    // layer checks the referenced company exists before inserting
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL,
            rating INTEGER NOT NULL,
            comment TEXT,
            company_id INTEGER REFERENCES company (id),
            timestamp TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    log::info!("Database schema initialized");
    Ok(())
}

/// Seed initial companies if the table is empty
/// DOCUMENTATION: Guarded by an emptiness check so restarts do not duplicate rows
pub async fn seed_companies(pool: &SqlitePool) -> Result<(), FeedbackError> {
    let existing = CompanyRepository::count_all(pool).await?;
    if existing > 0 {
        log::info!(
            "Company table already has {} rows, skipping seed",
            existing
        );
        return Ok(());
    }

    log::info!("Company table empty, adding initial companies...");
    for (name, industry) in SEED_COMPANIES {
        CompanyRepository::insert(pool, name, Some(industry)).await?;
    }
    log::info!("Added {} initial companies", SEED_COMPANIES.len());

    Ok(())
}
