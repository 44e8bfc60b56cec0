use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PreviewStore;
use crate::modules::portfolio::domain::PREVIEW_PORTFOLIO_ID;
use crate::modules::wizard::application::ports::incoming::use_cases::{
    PreviewOutcome, PreviewWizardError, PreviewWizardUseCase,
};
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::domain::SubmitPurpose;

pub struct PreviewWizardService {
    registry: Arc<WizardRegistry>,
    preview_store: Arc<dyn PreviewStore>,
}

impl PreviewWizardService {
    pub fn new(registry: Arc<WizardRegistry>, preview_store: Arc<dyn PreviewStore>) -> Self {
        Self {
            registry,
            preview_store,
        }
    }
}

#[async_trait]
impl PreviewWizardUseCase for PreviewWizardService {
    async fn execute(&self, wizard_id: Uuid) -> Result<PreviewOutcome, PreviewWizardError> {
        let portfolio = self
            .registry
            .with_wizard(wizard_id, |wizard| {
                wizard.submit(SubmitPurpose::Preview, Utc::now())
            })
            .await
            .ok_or(PreviewWizardError::NotFound)?
            .map_err(PreviewWizardError::Blocked)?;

        self.preview_store.store_preview(&portfolio).map_err(|e| {
            error!(%wizard_id, "Failed to store preview: {}", e);
            PreviewWizardError::StorageError(e.to_string())
        })?;

        info!(%wizard_id, "Preview stored");
        Ok(PreviewOutcome {
            url: format!("/portfolio/{}", PREVIEW_PORTFOLIO_ID),
            portfolio,
        })
    }
}
