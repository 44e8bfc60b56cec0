use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardWizardError {
    NotFound,
}

impl fmt::Display for DiscardWizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardWizardError::NotFound => write!(f, "wizard session not found"),
        }
    }
}

/// Cancel: drops the session and its draft.
#[async_trait]
pub trait DiscardWizardUseCase: Send + Sync {
    async fn execute(&self, wizard_id: Uuid) -> Result<(), DiscardWizardError>;
}
