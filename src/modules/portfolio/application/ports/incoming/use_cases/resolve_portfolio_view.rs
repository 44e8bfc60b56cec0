use async_trait::async_trait;
use std::fmt;

use crate::modules::portfolio::domain::Portfolio;

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioView {
    pub portfolio: Portfolio,
    pub is_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvePortfolioViewError {
    NotFound,
}

impl fmt::Display for ResolvePortfolioViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvePortfolioViewError::NotFound => write!(f, "portfolio not found"),
        }
    }
}

/// Finds the record behind a detail page: the collection for ordinary ids,
/// the preview slot for the reserved `preview` id.
#[async_trait]
pub trait ResolvePortfolioViewUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<PortfolioView, ResolvePortfolioViewError>;
}
