use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::DiscardWizardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Discard a wizard session
#[utoipa::path(
    delete,
    path = "/api/wizards/{id}",
    tag = "wizards",
    params(("id" = Uuid, Path, description = "Wizard session id")),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Unknown session", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/wizards/{id}")]
pub async fn discard_wizard_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.wizard.discard.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DiscardWizardError::NotFound) => {
            ApiResponse::not_found("WIZARD_NOT_FOUND", "Wizard session not found")
        }
    }
}
