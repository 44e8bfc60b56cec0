use actix_web::{get, web, Responder};
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a portfolio by id
#[utoipa::path(
    get,
    path = "/api/portfolios/{id}",
    tag = "portfolios",
    params(("id" = String, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "Portfolio found", body = inline(crate::api::schemas::SuccessResponse<Portfolio>)),
        (status = 404, description = "No portfolio with that id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/portfolios/{id}")]
pub async fn get_portfolio_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.portfolio.get_single.execute(&id).await {
        Ok(portfolio) => ApiResponse::success(portfolio),
        Err(GetPortfolioError::NotFound) => {
            info!(portfolio_id = %id, "Portfolio not found");
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
    }
}
