use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::portfolio::domain::{Portfolio, SearchScope};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioSearch {
    pub term: String,
    pub scope: SearchScope,
}

/// Why the list looks the way it does. An empty collection and a filter
/// that matched nothing are reported differently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingState {
    Loading,
    Empty,
    NoResults,
    Results,
}

impl ListingState {
    pub fn message(self) -> Option<&'static str> {
        match self {
            ListingState::Loading => Some("Loading portfolios..."),
            ListingState::Empty => Some("No Portfolios Yet"),
            ListingState::NoResults => Some("No Results Found"),
            ListingState::Results => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioListing {
    pub state: ListingState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub portfolios: Vec<Portfolio>,
}

impl PortfolioListing {
    pub fn new(state: ListingState, total: usize, portfolios: Vec<Portfolio>) -> Self {
        Self {
            state,
            message: state.message().map(str::to_string),
            total,
            portfolios,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListPortfoliosUseCase: Send + Sync {
    async fn execute(&self, search: PortfolioSearch) -> PortfolioListing;
}
