// src/modules/portfolio/application/ports/outgoing/portfolio_storage.rs

use tracing::error;

use super::key_value_store::StorageError;
use crate::modules::portfolio::domain::Portfolio;

/// Namespace key the collection blob is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-generator-data";

/// Wholesale persistence of the portfolio collection.
///
/// There is no indexing and no partial update: every write replaces the
/// stored array.
pub trait PortfolioStorage: Send + Sync {
    fn load_portfolios(&self) -> Result<Vec<Portfolio>, StorageError>;

    fn save_portfolios(&self, portfolios: &[Portfolio]) -> Result<(), StorageError>;

    /// Upsert by id against what is currently stored.
    ///
    /// An unreadable blob is treated as an empty collection, so the write
    /// replaces it.
    fn save_portfolio(&self, portfolio: &Portfolio) -> Result<(), StorageError> {
        let mut portfolios = self.load_or_empty();

        match portfolios.iter().position(|p| p.id == portfolio.id) {
            Some(index) => portfolios[index] = portfolio.clone(),
            None => portfolios.push(portfolio.clone()),
        }

        self.save_portfolios(&portfolios)
    }

    fn delete_portfolio(&self, id: &str) -> Result<(), StorageError> {
        let mut portfolios = self.load_or_empty();
        portfolios.retain(|p| p.id != id);
        self.save_portfolios(&portfolios)
    }

    fn load_or_empty(&self) -> Vec<Portfolio> {
        self.load_portfolios().unwrap_or_else(|e| {
            error!("Error loading portfolios from storage: {}", e);
            Vec::new()
        })
    }
}
