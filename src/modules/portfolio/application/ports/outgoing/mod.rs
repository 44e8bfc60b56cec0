mod key_value_store;
mod portfolio_storage;
mod preview_store;

pub use key_value_store::{KeyValueStore, StorageError};
pub use portfolio_storage::{PortfolioStorage, DEFAULT_STORAGE_KEY};
pub use preview_store::{PreviewStore, PREVIEW_STORAGE_KEY};
