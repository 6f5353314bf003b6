// src/services/reputation_service.rs
// DOCUMENTATION: Reputation aggregation
// PURPOSE: Compute the on-demand reputation aggregate for a company

use crate::db::{CompanyRepository, FeedbackRepository};
use crate::errors::FeedbackError;
use crate::models::Reputation;
use sqlx::SqlitePool;

pub struct ReputationService;

impl ReputationService {
    /// Compute the reputation aggregate for a company
    /// DOCUMENTATION: Ratings and the total count come from two independent
    /// queries; ratings without a value are dropped before averaging
    pub async fn get_reputation(
        pool: &SqlitePool,
        company_id: i64,
    ) -> Result<Reputation, FeedbackError> {
        let company = CompanyRepository::get_by_id(pool, company_id).await?;

        let rating_values = FeedbackRepository::ratings_by_company(pool, company_id).await?;
        let total_feedbacks = FeedbackRepository::count_by_company(pool, company_id).await?;

        let ratings: Vec<i32> = rating_values.into_iter().flatten().collect();
        let feedback_with_rating_count = ratings.len() as i64;

        let average_rating = if ratings.is_empty() {
            None
        } else {
            let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
            Some(round_two(sum as f64 / ratings.len() as f64))
        };

        Ok(Reputation {
            company_id: company.id,
            company_name: company.name,
            average_rating,
            total_feedbacks,
            feedback_with_rating_count,
        })
    }
}

/// Round to two decimal places
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
