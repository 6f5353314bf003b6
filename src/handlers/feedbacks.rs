// src/handlers/feedbacks.rs
// DOCUMENTATION: HTTP handlers for feedback operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::FeedbackError;
use crate::models::CreateFeedbackRequest;
use crate::services::FeedbackService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

/// POST /feedbacks
/// Create a new feedback record
pub async fn create_feedback(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreateFeedbackRequest>,
) -> Result<impl Responder, FeedbackError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(FeedbackError::ValidationError(e.to_string()));
    }

    let feedback = FeedbackService::create_feedback(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(feedback))
}

/// Configuration for feedback routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/feedbacks").route("", web::post().to(create_feedback)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{schema, CompanyRepository, FeedbackRepository};
    use crate::models::{Feedback, FeedbackType};
    use actix_web::{test, App};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_pool() -> SqlitePool {
        // Single connection so every query sees the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::init_schema(&pool).await.unwrap();
        pool
    }

    #[actix_web::test]
    async fn test_create_feedback_returns_persisted_record() {
        let pool = setup_pool().await;
        let company = CompanyRepository::insert(&pool, "Alpha", None).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/feedbacks")
            .set_json(serde_json::json!({
                "type": "compliment",
                "rating": 5,
                "comment": "Great place to work",
                "company_id": company.id
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let feedback: Feedback = test::read_body_json(resp).await;
        assert!(feedback.id >= 1);
        assert_eq!(feedback.type_field, FeedbackType::Compliment);
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.comment.as_deref(), Some("Great place to work"));
        assert_eq!(feedback.company_id, Some(company.id));
    }

    #[actix_web::test]
    async fn test_create_feedback_for_unknown_company_inserts_nothing() {
        let pool = setup_pool().await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/feedbacks")
            .set_json(serde_json::json!({
                "type": "complaint",
                "rating": 1,
                "company_id": 42
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let count = FeedbackRepository::count_by_company(&pool, 42).await.unwrap();
        assert_eq!(count, 0);
    }

    #[actix_web::test]
    async fn test_create_feedback_rejects_out_of_range_rating() {
        let pool = setup_pool().await;
        let company = CompanyRepository::insert(&pool, "Alpha", None).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(config),
        )
        .await;

        for rating in [0, 6] {
            let req = test::TestRequest::post()
                .uri("/feedbacks")
                .set_json(serde_json::json!({
                    "type": "complaint",
                    "rating": rating,
                    "company_id": company.id
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }

        let count = FeedbackRepository::count_by_company(&pool, company.id)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[actix_web::test]
    async fn test_create_feedback_rejects_unknown_type() {
        let pool = setup_pool().await;
        let company = CompanyRepository::insert(&pool, "Alpha", None).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/feedbacks")
            .set_json(serde_json::json!({
                "type": "praise",
                "rating": 3,
                "company_id": company.id
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
