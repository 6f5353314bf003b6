// src/handlers/companies.rs
// DOCUMENTATION: HTTP handlers for company operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::FeedbackError;
use crate::services::{CompanyService, FeedbackService, ReputationService};
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

/// GET /companies
/// List all companies
pub async fn list_companies(pool: web::Data<SqlitePool>) -> Result<impl Responder, FeedbackError> {
    let companies = CompanyService::list_companies(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(companies))
}

/// GET /companies/{id}/feedbacks
/// List all feedback for a company
pub async fn list_company_feedbacks(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, FeedbackError> {
    let company_id = path.into_inner();
    let feedbacks = FeedbackService::list_for_company(pool.get_ref(), company_id).await?;
    Ok(HttpResponse::Ok().json(feedbacks))
}

/// GET /companies/{id}/reputation
/// Compute the reputation aggregate for a company
pub async fn get_company_reputation(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<impl Responder, FeedbackError> {
    let company_id = path.into_inner();
    let reputation = ReputationService::get_reputation(pool.get_ref(), company_id).await?;
    Ok(HttpResponse::Ok().json(reputation))
}

/// Configuration for company routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/companies")
            .route("", web::get().to(list_companies))
            .route("/{id}/feedbacks", web::get().to(list_company_feedbacks))
            .route("/{id}/reputation", web::get().to(get_company_reputation)),
    );
}
