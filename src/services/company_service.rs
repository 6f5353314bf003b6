// src/services/company_service.rs

use crate::db::CompanyRepository;
use crate::errors::FeedbackError;
use crate::models::Company;
use sqlx::SqlitePool;

pub struct CompanyService;

impl CompanyService {
    /// List all companies
    pub async fn list_companies(pool: &SqlitePool) -> Result<Vec<Company>, FeedbackError> {
        CompanyRepository::list_all(pool).await
    }
}
