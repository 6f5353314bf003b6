// src/models/feedback.rs
// DOCUMENTATION: Core data structures for feedback
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Kind of feedback an employee can submit
/// DOCUMENTATION: Stored as lowercase text in the feedback table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FeedbackType {
    Complaint,
    Compliment,
}

/// Represents a complete feedback record from the database
/// DOCUMENTATION: This struct maps directly to the feedback table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    /// Unique identifier (autoincrement)
    pub id: i64,

    /// Feedback kind: complaint or compliment
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_field: FeedbackType,

    /// Rating from 1 (worst) to 5 (best)
    pub rating: i32,

    /// Optional free-form comment
    pub comment: Option<String>,

    /// Company this feedback refers to
    /// Nullable at schema level; creation requires it and checks existence
    pub company_id: Option<i64>,

    /// Server-assigned creation time
    pub timestamp: DateTime<Utc>,
}

/// Request DTO for creating a new feedback
/// DOCUMENTATION: Data transfer object for POST /feedbacks endpoint
/// Used for API input validation and database inserts
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    /// Feedback kind (required)
    #[serde(rename = "type")]
    pub type_: FeedbackType,

    /// Rating (required, 1-5 inclusive)
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    /// Optional comment
    pub comment: Option<String>,

    /// Target company (required; must reference an existing company)
    pub company_id: i64,
}
