use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::domain::Portfolio;
use crate::modules::wizard::domain::BlockedSubmission;

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PreviewOutcome {
    /// Where the rendered preview can be opened.
    #[schema(example = "/portfolio/preview")]
    pub url: String,
    pub portfolio: Portfolio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewWizardError {
    NotFound,
    Blocked(BlockedSubmission),
    StorageError(String),
}

impl fmt::Display for PreviewWizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewWizardError::NotFound => write!(f, "wizard session not found"),
            PreviewWizardError::Blocked(blocked) => write!(f, "{}", blocked.message),
            PreviewWizardError::StorageError(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

/// Validates the draft and places it in the preview slot. The session
/// stays open and the stored collection is not touched.
#[async_trait]
pub trait PreviewWizardUseCase: Send + Sync {
    async fn execute(&self, wizard_id: Uuid) -> Result<PreviewOutcome, PreviewWizardError>;
}
