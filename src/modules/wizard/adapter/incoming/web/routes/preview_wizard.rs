use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::{
    PreviewOutcome, PreviewWizardError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Preview the wizard draft
///
/// Same validation as save. A valid draft is placed in the preview slot
/// and can be opened at the returned URL; nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/wizards/{id}/preview",
    tag = "wizards",
    params(("id" = Uuid, Path, description = "Wizard session id")),
    responses(
        (status = 200, description = "Preview ready", body = inline(crate::api::schemas::SuccessResponse<PreviewOutcome>)),
        (status = 404, description = "Unknown session", body = crate::api::schemas::ErrorResponse),
        (status = 422, description = "Draft has validation errors", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/wizards/{id}/preview")]
pub async fn preview_wizard_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let wizard_id = path.into_inner();

    match data.wizard.preview.execute(wizard_id).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(PreviewWizardError::NotFound) => {
            ApiResponse::not_found("WIZARD_NOT_FOUND", "Wizard session not found")
        }
        Err(PreviewWizardError::Blocked(blocked)) => {
            info!(%wizard_id, error_count = blocked.error_count, "Preview blocked by validation");
            ApiResponse::validation_failed(&blocked.message, &blocked)
        }
        Err(PreviewWizardError::StorageError(msg)) => {
            error!("Failed to store preview for wizard {}: {}", wizard_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value as JsonValue;

    use crate::modules::portfolio::adapter::incoming::web::routes::view_portfolio_handler;
    use crate::tests::support::fixtures::{memory_app_state, sample_portfolio};

    #[actix_web::test]
    async fn test_preview_then_render() {
        let state = memory_app_state(vec![sample_portfolio("p-1", "Ann")]).await;
        let opened = state.wizard.open.execute(Some("p-1".to_string())).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(preview_wizard_handler)
                .service(view_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/preview", opened.id))
            .to_request();
        let body: JsonValue = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["url"], "/portfolio/preview");
        assert_eq!(body["data"]["portfolio"]["id"], "preview");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/portfolio/preview").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&html);
        assert!(html.contains("Ann"));
        assert!(!html.contains("Back to Dashboard"));

        // session stays open, collection untouched
        assert!(state.wizard.get.execute(opened.id).await.is_ok());
        assert!(state.portfolio.get_single.execute("preview").await.is_err());
    }

    #[actix_web::test]
    async fn test_blocked_preview_returns_422() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(App::new().app_data(state).service(preview_wizard_handler)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/preview", opened.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(
            body["error"]["message"],
            "Please fix 2 validation errors before previewing. Check the highlighted fields."
        );
    }
}
