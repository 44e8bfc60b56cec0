use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::wizard::application::ports::incoming::use_cases::{
    DiscardWizardError, DiscardWizardUseCase,
};
use crate::modules::wizard::application::registry::WizardRegistry;

pub struct DiscardWizardService {
    registry: Arc<WizardRegistry>,
}

impl DiscardWizardService {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl DiscardWizardUseCase for DiscardWizardService {
    async fn execute(&self, wizard_id: Uuid) -> Result<(), DiscardWizardError> {
        self.registry
            .remove(wizard_id)
            .await
            .ok_or(DiscardWizardError::NotFound)?;

        info!(%wizard_id, "Wizard session discarded");
        Ok(())
    }
}
