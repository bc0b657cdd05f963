//! Route configuration for questionnaire endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{get_progress, record_answers, send_questionnaire, submit_questionnaire};

/// Creates the questionnaire router, nested under `/api/questionnaires`.
pub fn questionnaire_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(send_questionnaire))
        .route("/:id/answers", put(record_answers))
        .route("/:id/submit", post(submit_questionnaire))
        .route("/:id/progress", get(get_progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::EngagementSettings;
    use crate::adapters::memory::InMemoryTemplateCatalog;
    use crate::adapters::stripe::MockCheckoutSessionCreator;
    use crate::domain::foundation::{ClientId, QuestionnaireId, TemplateId};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::in_memory(
            InMemoryTemplateCatalog::new(),
            Arc::new(MockCheckoutSessionCreator::new()),
            EngagementSettings::default(),
        );
        questionnaire_routes().with_state(state)
    }

    #[tokio::test]
    async fn sending_to_unknown_client_is_not_found() {
        let body = serde_json::json!({
            "client_id": ClientId::new().to_string(),
            "template_id": TemplateId::new().to_string(),
        });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn answers_without_payload_are_rejected() {
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}/answers", QuestionnaireId::new()))
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn progress_for_unknown_questionnaire_is_not_found() {
        let request = Request::builder()
            .uri(format!("/{}/progress?index=2", QuestionnaireId::new()))
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
