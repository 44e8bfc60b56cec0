use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::modules::portfolio::adapter::incoming::web::views::{render_not_found, render_portfolio};
use crate::modules::portfolio::application::ports::incoming::use_cases::ResolvePortfolioViewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn not_found_page() -> HttpResponse {
    match render_not_found() {
        Ok(html) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!("Failed to render not-found page: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Render a portfolio page
///
/// The reserved id `preview` renders the draft in the preview slot.
#[utoipa::path(
    get,
    path = "/portfolio/{id}",
    tag = "pages",
    params(("id" = String, Path, description = "Portfolio id, or `preview`")),
    responses(
        (status = 200, description = "Rendered portfolio", content_type = "text/html"),
        (status = 404, description = "Portfolio Not Found page", content_type = "text/html")
    )
)]
#[get("/portfolio/{id}")]
pub async fn view_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let view = match data.portfolio.resolve_view.execute(&id).await {
        Ok(view) => view,
        Err(ResolvePortfolioViewError::NotFound) => {
            info!(portfolio_id = %id, "No portfolio to render");
            return not_found_page();
        }
    };

    match render_portfolio(&view.portfolio, view.is_preview) {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => {
            error!("Failed to render portfolio {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
