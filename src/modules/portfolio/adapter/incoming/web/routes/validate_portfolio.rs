use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::portfolio::domain::{validate_portfolio, PortfolioFormData, ValidationErrors};
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationReport {
    pub valid: bool,
    /// Top-level keys of `errors`; a nested group counts once.
    pub error_count: usize,
    #[schema(value_type = Object)]
    pub errors: ValidationErrors,
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            error_count: errors.len(),
            errors,
        }
    }
}

/// Validate a draft
///
/// Runs the persistence rules without saving anything.
#[utoipa::path(
    post,
    path = "/api/portfolios/validate",
    tag = "portfolios",
    request_body = PortfolioFormData,
    responses(
        (status = 200, description = "Validation result", body = inline(crate::api::schemas::SuccessResponse<ValidationReport>)),
        (status = 400, description = "Malformed body", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/portfolios/validate")]
pub async fn validate_portfolio_handler(payload: web::Json<PortfolioFormData>) -> impl Responder {
    ApiResponse::success(ValidationReport::from(validate_portfolio(&payload)))
}
