use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::GetWizardError;
use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get wizard state
#[utoipa::path(
    get,
    path = "/api/wizards/{id}",
    tag = "wizards",
    params(("id" = Uuid, Path, description = "Wizard session id")),
    responses(
        (status = 200, description = "Current wizard state", body = inline(crate::api::schemas::SuccessResponse<WizardSnapshot>)),
        (status = 404, description = "Unknown session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/wizards/{id}")]
pub async fn get_wizard_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.wizard.get.execute(path.into_inner()).await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(GetWizardError::NotFound) => {
            ApiResponse::not_found("WIZARD_NOT_FOUND", "Wizard session not found")
        }
    }
}
