use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::{
    ApplyWizardActionError, ApplyWizardActionUseCase,
};
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::modules::wizard::domain::WizardAction;

pub struct ApplyWizardActionService {
    registry: Arc<WizardRegistry>,
}

impl ApplyWizardActionService {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ApplyWizardActionUseCase for ApplyWizardActionService {
    async fn execute(
        &self,
        wizard_id: Uuid,
        action: WizardAction,
    ) -> Result<WizardSnapshot, ApplyWizardActionError> {
        self.registry
            .with_wizard(wizard_id, |wizard| {
                action
                    .apply(wizard)
                    .map(|_| WizardSnapshot::capture(wizard_id, wizard))
                    .map_err(|e| ApplyWizardActionError::InvalidAction(e.to_string()))
            })
            .await
            .ok_or(ApplyWizardActionError::NotFound)?
    }
}
