// src/models/company.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Company being rated through employee feedback
/// DOCUMENTATION: Maps directly to the company table
/// Rows are created only by the startup seeder
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Unique identifier (autoincrement)
    pub id: i64,

    /// Company name - required, indexed but not unique
    pub name: String,

    /// Industry the company operates in
    pub industry: Option<String>,
}
