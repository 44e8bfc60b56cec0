use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::SavePortfolioUseCase;
use crate::modules::portfolio::domain::Portfolio;
use crate::modules::wizard::application::ports::incoming::use_cases::{
    SaveWizardError, SaveWizardUseCase,
};
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::domain::SubmitPurpose;

pub struct SaveWizardService {
    registry: Arc<WizardRegistry>,
    save_portfolio: Arc<dyn SavePortfolioUseCase + Send + Sync>,
}

impl SaveWizardService {
    pub fn new(
        registry: Arc<WizardRegistry>,
        save_portfolio: Arc<dyn SavePortfolioUseCase + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            save_portfolio,
        }
    }
}

#[async_trait]
impl SaveWizardUseCase for SaveWizardService {
    async fn execute(&self, wizard_id: Uuid) -> Result<Portfolio, SaveWizardError> {
        let portfolio = self
            .registry
            .with_wizard(wizard_id, |wizard| wizard.submit(SubmitPurpose::Save, Utc::now()))
            .await
            .ok_or(SaveWizardError::NotFound)?
            .map_err(SaveWizardError::Blocked)?;

        let saved = self.save_portfolio.execute(portfolio).await.map_err(|e| {
            error!(%wizard_id, "Failed to save portfolio: {}", e);
            SaveWizardError::RepositoryError(e.to_string())
        })?;

        self.registry.remove(wizard_id).await;
        info!(%wizard_id, portfolio_id = %saved.id, "Wizard session saved and closed");

        Ok(saved)
    }
}
