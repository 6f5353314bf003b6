// src/db/company_repository.rs
// DOCUMENTATION: Company database operations
// PURPOSE: Abstract company queries from business logic

use crate::errors::FeedbackError;
use crate::models::Company;
use sqlx::SqlitePool;

pub struct CompanyRepository;

impl CompanyRepository {
    /// List all companies
    /// DOCUMENTATION: Flat list, no filtering or pagination
    /// Used by GET /companies endpoint
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Company>, FeedbackError> {
        let companies = sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, industry FROM company
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list companies: {}", e);
            FeedbackError::DatabaseError(e.to_string())
        })?;

        Ok(companies)
    }

    /// Retrieve company by ID
    /// DOCUMENTATION: Missing company surfaces as NotFound
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Company, FeedbackError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, industry FROM company WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching company {}: {}", id, e);
            FeedbackError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Company not found: {}", id);
            FeedbackError::NotFound(id.to_string())
        })?;

        Ok(company)
    }

    /// Count all companies
    /// DOCUMENTATION: Used by the startup seeder to detect an empty table
    pub async fn count_all(pool: &SqlitePool) -> Result<i64, FeedbackError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM company")
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count companies: {}", e);
                FeedbackError::DatabaseError(e.to_string())
            })?;

        Ok(count)
    }

    /// Insert a new company
    /// DOCUMENTATION: Only called by the startup seeder; there is no
    /// create-company endpoint
    pub async fn insert(
        pool: &SqlitePool,
        name: &str,
        industry: Option<&str>,
    ) -> Result<Company, FeedbackError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO company (name, industry)
            VALUES (?, ?)
            RETURNING id, name, industry
            "#,
        )
        .bind(name)
        .bind(industry)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to insert company {}: {}", name, e);
            FeedbackError::DatabaseError(e.to_string())
        })?;

        log::info!("Created company with id: {}", company.id);
        Ok(company)
    }
}
