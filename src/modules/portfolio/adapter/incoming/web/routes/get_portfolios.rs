use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListingState, PortfolioListing, PortfolioSearch,
};
use crate::modules::portfolio::domain::{Portfolio, SearchScope, TemplateKind};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query / response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPortfoliosQuery {
    /// Case-insensitive substring; empty matches everything.
    pub search: Option<String>,

    /// `all` (name, title, bio), `skills` or `title`.
    #[serde(default)]
    #[param(inline)]
    pub filter_by: SearchScope,
}

impl From<GetPortfoliosQuery> for PortfolioSearch {
    fn from(q: GetPortfoliosQuery) -> Self {
        PortfolioSearch {
            term: q.search.unwrap_or_default(),
            scope: q.filter_by,
        }
    }
}

/// Dashboard card for one portfolio.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortfolioCardDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub template: TemplateKind,
    pub technical_skills: Vec<String>,
    pub project_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub delete_confirmation: String,
}

impl From<Portfolio> for PortfolioCardDto {
    fn from(p: Portfolio) -> Self {
        Self {
            delete_confirmation: p.delete_confirmation(),
            id: p.id,
            name: p.personal_info.name,
            title: p.personal_info.title,
            bio: p.bio,
            template: p.template,
            technical_skills: p.skills.technical,
            project_count: p.projects.len(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortfolioListResponse {
    pub state: ListingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub portfolios: Vec<PortfolioCardDto>,
}

impl From<PortfolioListing> for PortfolioListResponse {
    fn from(listing: PortfolioListing) -> Self {
        Self {
            state: listing.state,
            message: listing.message,
            total: listing.total,
            portfolios: listing.portfolios.into_iter().map(Into::into).collect(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List portfolios
///
/// Filters the collection. An empty collection (`empty`) and a filter with
/// no matches (`no_results`) are reported as different states.
#[utoipa::path(
    get,
    path = "/api/portfolios",
    tag = "portfolios",
    params(GetPortfoliosQuery),
    responses(
        (status = 200, description = "Filtered portfolio list", body = inline(crate::api::schemas::SuccessResponse<PortfolioListResponse>)),
        (status = 400, description = "Unknown filter", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/portfolios")]
pub async fn get_portfolios_handler(
    query: web::Query<GetPortfoliosQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing = data.portfolio.list.execute(query.into_inner().into()).await;
    ApiResponse::success(PortfolioListResponse::from(listing))
}
