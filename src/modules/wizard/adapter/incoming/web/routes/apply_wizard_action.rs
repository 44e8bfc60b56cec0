use actix_web::{post, web, Responder};
use tracing::warn;
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::ApplyWizardActionError;
use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::modules::wizard::domain::WizardAction;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Apply a wizard action
///
/// Navigation and field edits. `next` re-validates the draft and reports
/// the errors but always advances.
#[utoipa::path(
    post,
    path = "/api/wizards/{id}/actions",
    tag = "wizards",
    params(("id" = Uuid, Path, description = "Wizard session id")),
    request_body = WizardAction,
    responses(
        (status = 200, description = "Updated wizard state", body = inline(crate::api::schemas::SuccessResponse<WizardSnapshot>)),
        (status = 400, description = "Malformed or inapplicable action", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/wizards/{id}/actions")]
pub async fn apply_wizard_action_handler(
    path: web::Path<Uuid>,
    payload: web::Json<WizardAction>,
    data: web::Data<AppState>,
) -> impl Responder {
    let wizard_id = path.into_inner();

    match data
        .wizard
        .apply_action
        .execute(wizard_id, payload.into_inner())
        .await
    {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(ApplyWizardActionError::NotFound) => {
            ApiResponse::not_found("WIZARD_NOT_FOUND", "Wizard session not found")
        }
        Err(ApplyWizardActionError::InvalidAction(msg)) => {
            warn!(%wizard_id, "Rejected wizard action: {}", msg);
            ApiResponse::bad_request("INVALID_ACTION", &msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value as JsonValue};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::fixtures::memory_app_state;

    #[actix_web::test]
    async fn test_actions_update_snapshot() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(apply_wizard_action_handler),
        )
        .await;
        let uri = format!("/api/wizards/{}/actions", opened.id);

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "type": "add_skill", "category": "technical", "skill": "Rust" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "type": "next" }))
            .to_request();
        let body: JsonValue = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["current_step"], "personal");
        assert_eq!(body["data"]["step_label"], "Personal Info");
        assert_eq!(body["data"]["draft"]["skills"]["technical"][0], "Rust");
        assert_eq!(body["data"]["errors"]["personalInfo"]["name"], "Name is required");
    }

    #[actix_web::test]
    async fn test_unknown_action_type_is_bad_request() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(apply_wizard_action_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/actions", opened.id))
            .set_json(json!({ "type": "launch_rocket" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_inapplicable_action_is_bad_request() {
        let state = memory_app_state(vec![]).await;
        let opened = state.wizard.open.execute(None).await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(apply_wizard_action_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/wizards/{}/actions", opened.id))
            .set_json(json!({ "type": "go_to_step", "step": "Billing" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ACTION");
    }
}
