use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::portfolio::domain::Portfolio;
use crate::modules::wizard::domain::BlockedSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveWizardError {
    NotFound,
    /// Draft failed validation; the session stays open on the reported step.
    Blocked(BlockedSubmission),
    RepositoryError(String),
}

impl fmt::Display for SaveWizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveWizardError::NotFound => write!(f, "wizard session not found"),
            SaveWizardError::Blocked(blocked) => write!(f, "{}", blocked.message),
            SaveWizardError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Validates and persists the draft, closing the session on success.
#[async_trait]
pub trait SaveWizardUseCase: Send + Sync {
    async fn execute(&self, wizard_id: Uuid) -> Result<Portfolio, SaveWizardError>;
}
