use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::{
    GetWizardError, GetWizardUseCase,
};
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::application::snapshot::WizardSnapshot;

pub struct GetWizardService {
    registry: Arc<WizardRegistry>,
}

impl GetWizardService {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl GetWizardUseCase for GetWizardService {
    async fn execute(&self, wizard_id: Uuid) -> Result<WizardSnapshot, GetWizardError> {
        self.registry
            .with_wizard(wizard_id, |wizard| WizardSnapshot::capture(wizard_id, wizard))
            .await
            .ok_or(GetWizardError::NotFound)
    }
}
