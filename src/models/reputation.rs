// src/models/reputation.rs

use serde::Serialize;

/// Reputation aggregate computed on demand for a company
/// DOCUMENTATION: Derived read-only DTO, never persisted
/// Used for GET /companies/{id}/reputation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Reputation {
    pub company_id: i64,
    pub company_name: String,

    /// Arithmetic mean of ratings, rounded to 2 decimals
    /// None when the company has no rated feedback
    pub average_rating: Option<f64>,

    /// Total feedback rows for the company
    pub total_feedbacks: i64,

    /// Feedback rows that carried a rating
    pub feedback_with_rating_count: i64,
}
