use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a portfolio
///
/// Deleting an id that does not exist is not an error.
#[utoipa::path(
    delete,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = String, Path, description = "Portfolio id")),
    responses(
        (status = 204, description = "Portfolio removed (or was absent)"),
        (status = 500, description = "Storage write failed", body = crate::api::schemas::ErrorResponse)
    )
)]
#[delete("/api/portfolios/{id}")]
pub async fn delete_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.delete.execute(&id).await {
        Ok(()) => {
            info!(portfolio_id = %id, "Portfolio deleted");
            ApiResponse::no_content()
        }
        Err(DeletePortfolioError::RepositoryError(msg)) => {
            error!("Failed to delete portfolio {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
