use async_trait::async_trait;
use std::fmt;

use crate::modules::portfolio::domain::Portfolio;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePortfolioError {
    RepositoryError(String),
}

impl fmt::Display for SavePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavePortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Upserts a finished record by id. Validation happens before this point.
#[async_trait]
pub trait SavePortfolioUseCase: Send + Sync {
    async fn execute(&self, portfolio: Portfolio) -> Result<Portfolio, SavePortfolioError>;
}
