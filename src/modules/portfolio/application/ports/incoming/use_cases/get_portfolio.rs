use async_trait::async_trait;
use std::fmt;

use crate::modules::portfolio::domain::Portfolio;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetPortfolioError {
    NotFound,
}

impl fmt::Display for GetPortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPortfolioError::NotFound => write!(f, "portfolio not found"),
        }
    }
}

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Portfolio, GetPortfolioError>;
}
