// src/services/feedback_service.rs
// DOCUMENTATION: Business logic for feedback
// PURPOSE: Intermediary between handlers and repositories, owns the
// company existence checks

use crate::db::{CompanyRepository, FeedbackRepository};
use crate::errors::FeedbackError;
use crate::models::{CreateFeedbackRequest, Feedback};
use sqlx::SqlitePool;

pub struct FeedbackService;

impl FeedbackService {
    /// List all feedback for a company
    /// DOCUMENTATION: The company must exist; unknown ids surface as
    /// NotFound rather than an empty list
    pub async fn list_for_company(
        pool: &SqlitePool,
        company_id: i64,
    ) -> Result<Vec<Feedback>, FeedbackError> {
        let _ = CompanyRepository::get_by_id(pool, company_id).await?;
        FeedbackRepository::list_by_company(pool, company_id).await
    }

    /// Create a new feedback record
    /// DOCUMENTATION: Checks the referenced company exists before inserting;
    /// nothing is persisted when the check fails
    pub async fn create_feedback(
        pool: &SqlitePool,
        req: CreateFeedbackRequest,
    ) -> Result<Feedback, FeedbackError> {
        let _ = CompanyRepository::get_by_id(pool, req.company_id).await?;
        FeedbackRepository::create(pool, &req).await
    }
}
