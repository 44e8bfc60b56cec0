mod file_key_value_store;
mod memory_key_value_store;
mod portfolio_storage_kv;
mod preview_store_kv;

pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use portfolio_storage_kv::KeyValuePortfolioStorage;
pub use preview_store_kv::KeyValuePreviewStore;
