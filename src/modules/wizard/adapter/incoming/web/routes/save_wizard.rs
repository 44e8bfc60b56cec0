use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::portfolio::domain::Portfolio;
use crate::modules::wizard::application::ports::incoming::use_cases::SaveWizardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save the wizard draft
///
/// Validates the whole draft. On failure the session moves to the step
/// holding the first reported error and the field errors are returned.
/// On success the record is stored and the session closes.
#[utoipa::path(
    post,
    path = "/api/wizards/{id}/save",
    tag = "wizards",
    params(("id" = Uuid, Path, description = "Wizard session id")),
    responses(
        (status = 201, description = "Portfolio saved", body = inline(crate::api::schemas::SuccessResponse<Portfolio>)),
        (status = 404, description = "Unknown session", body = crate::api::schemas::ErrorResponse),
        (status = 422, description = "Draft has validation errors", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage write failed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/wizards/{id}/save")]
pub async fn save_wizard_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let wizard_id = path.into_inner();

    match data.wizard.save.execute(wizard_id).await {
        Ok(portfolio) => ApiResponse::created(portfolio),
        Err(SaveWizardError::NotFound) => {
            ApiResponse::not_found("WIZARD_NOT_FOUND", "Wizard session not found")
        }
        Err(SaveWizardError::Blocked(blocked)) => {
            info!(%wizard_id, error_count = blocked.error_count, "Save blocked by validation");
            ApiResponse::validation_failed(&blocked.message, &blocked)
        }
        Err(SaveWizardError::RepositoryError(msg)) => {
            error!("Failed to save wizard {}: {}", wizard_id, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value as JsonValue};

    use crate::modules::wizard::application::ports::incoming::use_cases::SaveWizardUseCase;
    use crate::modules::wizard::adapter::incoming::web::routes::apply_wizard_action_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{memory_app_state, sample_portfolio};

    struct FailingSave;

    #[async_trait]
    impl SaveWizardUseCase for FailingSave {
        async fn execute(&self, _wizard_id: Uuid) -> Result<Portfolio, SaveWizardError> {
            Err(SaveWizardError::RepositoryError("quota exceeded".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_blocked_save_returns_422_and_moves_step() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(save_wizard_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/save", opened.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Please fix 2 validation errors before saving. Check the highlighted fields."
        );
        assert_eq!(body["error"]["details"]["error_count"], 2);
        assert_eq!(body["error"]["details"]["step"], "personal");
        assert_eq!(body["error"]["details"]["errors"]["bio"], "Bio is required");

        let snapshot = state.wizard.get.execute(opened.id).await.unwrap();
        assert_eq!(snapshot.current_step.key(), "personal");
    }

    #[actix_web::test]
    async fn test_create_flow_saves_and_closes_session() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(apply_wizard_action_handler)
                .service(save_wizard_handler),
        )
        .await;
        let actions_uri = format!("/api/wizards/{}/actions", opened.id);

        for action in [
            json!({ "type": "set_template", "template": "creative" }),
            json!({
                "type": "set_personal_info",
                "personalInfo": { "name": "Ann", "title": "Eng", "email": "ann@example.com" }
            }),
            json!({ "type": "set_bio", "bio": "Builds things." }),
        ] {
            let req = test::TestRequest::post()
                .uri(&actions_uri)
                .set_json(action)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/save", opened.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: JsonValue = test::read_body_json(resp).await;
        let saved: Portfolio = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(saved.personal_info.name, "Ann");
        assert_eq!(state.portfolio.get_single.execute(&saved.id).await.unwrap(), saved);
        assert!(state.wizard.get.execute(opened.id).await.is_err());
    }

    #[actix_web::test]
    async fn test_edit_flow_keeps_identity() {
        let stored = sample_portfolio("p-1", "Ann");
        let state = memory_app_state(vec![stored.clone()]).await;
        let opened = state.wizard.open.execute(Some("p-1".to_string())).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(save_wizard_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/save", opened.id))
            .to_request();
        let body: JsonValue = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["id"], "p-1");
        let all = state
            .portfolio
            .list
            .execute(Default::default())
            .await;
        assert_eq!(all.total, 1);
        assert_eq!(all.portfolios[0].created_at, stored.created_at);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_save_wizard(FailingSave)
            .build();
        let app = test::init_service(App::new().app_data(state).service(save_wizard_handler)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/save", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
