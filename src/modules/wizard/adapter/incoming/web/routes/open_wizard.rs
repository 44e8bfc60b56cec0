use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OpenWizardRequest {
    /// Portfolio to edit. Omit to create a new one.
    pub portfolio_id: Option<String>,
}

/// Open a wizard session
///
/// An unknown `portfolio_id` opens a blank create-mode wizard.
#[utoipa::path(
    post,
    path = "/api/wizards",
    tag = "wizards",
    request_body = OpenWizardRequest,
    responses(
        (status = 201, description = "Wizard opened", body = inline(crate::api::schemas::SuccessResponse<WizardSnapshot>))
    )
)]
#[post("/api/wizards")]
pub async fn open_wizard_handler(
    payload: Option<web::Json<OpenWizardRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();
    let snapshot = data.wizard.open.execute(request.portfolio_id).await;
    ApiResponse::created(snapshot)
}
