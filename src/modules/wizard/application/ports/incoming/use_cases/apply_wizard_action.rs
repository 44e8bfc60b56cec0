use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::modules::wizard::domain::WizardAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyWizardActionError {
    NotFound,
    InvalidAction(String),
}

impl fmt::Display for ApplyWizardActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyWizardActionError::NotFound => write!(f, "wizard session not found"),
            ApplyWizardActionError::InvalidAction(msg) => write!(f, "invalid action: {}", msg),
        }
    }
}

#[async_trait]
pub trait ApplyWizardActionUseCase: Send + Sync {
    async fn execute(
        &self,
        wizard_id: Uuid,
        action: WizardAction,
    ) -> Result<WizardSnapshot, ApplyWizardActionError>;
}
