use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePortfolioError {
    RepositoryError(String),
}

impl fmt::Display for DeletePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletePortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Deleting an id that is not in the collection succeeds without effect.
#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeletePortfolioError>;
}
