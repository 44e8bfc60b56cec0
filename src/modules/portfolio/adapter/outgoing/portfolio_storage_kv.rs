use crate::modules::portfolio::application::ports::outgoing::{
    KeyValueStore, PortfolioStorage, StorageError, DEFAULT_STORAGE_KEY,
};
use crate::modules::portfolio::domain::Portfolio;

/// Keeps the whole collection as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct KeyValuePortfolioStorage<K>
where
    K: KeyValueStore,
{
    store: K,
    key: String,
}

impl<K> KeyValuePortfolioStorage<K>
where
    K: KeyValueStore,
{
    pub fn new(store: K) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K> PortfolioStorage for KeyValuePortfolioStorage<K>
where
    K: KeyValueStore,
{
    fn load_portfolios(&self) -> Result<Vec<Portfolio>, StorageError> {
        match self.store.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_portfolios(&self, portfolios: &[Portfolio]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(portfolios)?;
        self.store.set_item(&self.key, &raw)
    }
}
