use crate::modules::portfolio::application::ports::outgoing::{
    KeyValueStore, PreviewStore, StorageError, PREVIEW_STORAGE_KEY,
};
use crate::modules::portfolio::domain::Portfolio;

#[derive(Debug, Clone)]
pub struct KeyValuePreviewStore<K>
where
    K: KeyValueStore,
{
    store: K,
}

impl<K> KeyValuePreviewStore<K>
where
    K: KeyValueStore,
{
    pub fn new(store: K) -> Self {
        Self { store }
    }
}

impl<K> PreviewStore for KeyValuePreviewStore<K>
where
    K: KeyValueStore,
{
    fn store_preview(&self, portfolio: &Portfolio) -> Result<(), StorageError> {
        let raw = serde_json::to_string(portfolio)?;
        self.store.set_item(PREVIEW_STORAGE_KEY, &raw)
    }

    fn load_preview(&self) -> Result<Option<Portfolio>, StorageError> {
        match self.store.get_item(PREVIEW_STORAGE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
