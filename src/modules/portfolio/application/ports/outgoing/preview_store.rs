// src/modules/portfolio/application/ports/outgoing/preview_store.rs

use super::key_value_store::StorageError;
use crate::modules::portfolio::domain::Portfolio;

pub const PREVIEW_STORAGE_KEY: &str = "preview-portfolio";

/// Single-slot, session-scoped holder for an unsaved draft.
pub trait PreviewStore: Send + Sync {
    /// Replaces whatever was in the slot.
    fn store_preview(&self, portfolio: &Portfolio) -> Result<(), StorageError>;

    /// `Ok(None)` when the slot is empty. A payload that does not parse is
    /// an error.
    fn load_preview(&self) -> Result<Option<Portfolio>, StorageError>;
}
