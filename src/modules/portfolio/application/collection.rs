use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::modules::portfolio::application::ports::outgoing::{PortfolioStorage, StorageError};
use crate::modules::portfolio::domain::Portfolio;

/// In-memory copy of the whole collection, written through to storage.
///
/// Reads are served from the cache. Writers take the cache lock before
/// touching storage, so the stored blob and the cache change together and
/// writes are serialized.
pub struct PortfolioCollection<S>
where
    S: PortfolioStorage,
{
    storage: S,
    portfolios: RwLock<Vec<Portfolio>>,
    loading: AtomicBool,
}

impl<S> PortfolioCollection<S>
where
    S: PortfolioStorage,
{
    /// An unloaded collection. Call [`load`](Self::load) before serving.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            portfolios: RwLock::new(Vec::new()),
            loading: AtomicBool::new(true),
        }
    }

    /// Reads the stored collection into the cache.
    ///
    /// A read or parse failure is logged and leaves the cache empty.
    pub async fn load(&self) {
        let loaded = match self.storage.load_portfolios() {
            Ok(portfolios) => portfolios,
            Err(e) => {
                error!("Error loading portfolios: {}", e);
                Vec::new()
            }
        };

        info!(count = loaded.len(), "Portfolio collection loaded");
        *self.portfolios.write().await = loaded;
        self.loading.store(false, Ordering::Release);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub async fn all(&self) -> Vec<Portfolio> {
        self.portfolios.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Portfolio> {
        self.portfolios
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Upsert by id: replaces in place, otherwise appends.
    pub async fn save(&self, portfolio: Portfolio) -> Result<Portfolio, StorageError> {
        let mut cache = self.portfolios.write().await;

        self.storage.save_portfolio(&portfolio)?;

        match cache.iter().position(|p| p.id == portfolio.id) {
            Some(index) => cache[index] = portfolio.clone(),
            None => cache.push(portfolio.clone()),
        }

        Ok(portfolio)
    }

    /// Removes the matching id. Missing ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut cache = self.portfolios.write().await;

        self.storage.delete_portfolio(id)?;
        cache.retain(|p| p.id != id);

        Ok(())
    }
}
