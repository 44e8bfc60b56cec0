use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::wizard::application::snapshot::WizardSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetWizardError {
    NotFound,
}

impl fmt::Display for GetWizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetWizardError::NotFound => write!(f, "wizard session not found"),
        }
    }
}

#[async_trait]
pub trait GetWizardUseCase: Send + Sync {
    async fn execute(&self, wizard_id: Uuid) -> Result<WizardSnapshot, GetWizardError>;
}
