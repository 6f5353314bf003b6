// src/db/feedback_repository.rs
// DOCUMENTATION: Feedback database operations
// PURPOSE: Handle insert and read operations for feedback rows

use crate::errors::FeedbackError;
use crate::models::{CreateFeedbackRequest, Feedback};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct FeedbackRepository;

impl FeedbackRepository {
    /// Create a new feedback row
    /// DOCUMENTATION: Assigns id and timestamp server-side and returns the
    /// persisted record; caller is responsible for the company existence check
    pub async fn create(
        pool: &SqlitePool,
        req: &CreateFeedbackRequest,
    ) -> Result<Feedback, FeedbackError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (type, rating, comment, company_id, timestamp)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, type, rating, comment, company_id, timestamp
            "#,
        )
        .bind(req.type_)
        .bind(req.rating)
        .bind(&req.comment)
        .bind(req.company_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create feedback: {}", e);
            FeedbackError::DatabaseError(format!("Create feedback failed: {}", e))
        })?;

        log::info!("Created feedback with id: {}", feedback.id);
        Ok(feedback)
    }

    /// Get all feedback for a company
    /// DOCUMENTATION: Returns rows in whatever order the store yields them
    pub async fn list_by_company(
        pool: &SqlitePool,
        company_id: i64,
    ) -> Result<Vec<Feedback>, FeedbackError> {
        let feedbacks = sqlx::query_as::<_, Feedback>(
            r#"
            SELECT id, type, rating, comment, company_id, timestamp
            FROM feedback
            WHERE company_id = ?
            "#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch feedback for company {}: {}", company_id, e);
            FeedbackError::DatabaseError(format!("Fetch feedback failed: {}", e))
        })?;

        Ok(feedbacks)
    }

    /// Fetch the rating values for a company's feedback
    /// DOCUMENTATION: Fetched as Option so absent ratings can be filtered
    /// out by the aggregation even though the column is NOT NULL today
    pub async fn ratings_by_company(
        pool: &SqlitePool,
        company_id: i64,
    ) -> Result<Vec<Option<i32>>, FeedbackError> {
        let ratings = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            SELECT rating FROM feedback WHERE company_id = ?
            "#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch ratings for company {}: {}", company_id, e);
            FeedbackError::DatabaseError(format!("Fetch ratings failed: {}", e))
        })?;

        Ok(ratings)
    }

    /// Count feedback rows for a company
    /// DOCUMENTATION: Kept as its own query; the aggregation reports this
    /// count independently of the ratings fetch
    pub async fn count_by_company(
        pool: &SqlitePool,
        company_id: i64,
    ) -> Result<i64, FeedbackError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM feedback WHERE company_id = ?
            "#,
        )
        .bind(company_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to count feedback for company {}: {}", company_id, e);
            FeedbackError::DatabaseError(format!("Count feedback failed: {}", e))
        })?;

        Ok(count)
    }
}
