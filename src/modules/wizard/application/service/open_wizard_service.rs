use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::wizard::application::ports::incoming::use_cases::OpenWizardUseCase;
use crate::modules::wizard::application::registry::WizardRegistry;
use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::modules::wizard::domain::FormWizard;

pub struct OpenWizardService {
    registry: Arc<WizardRegistry>,
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
}

impl OpenWizardService {
    pub fn new(
        registry: Arc<WizardRegistry>,
        get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            get_portfolio,
        }
    }
}

#[async_trait]
impl OpenWizardUseCase for OpenWizardService {
    async fn execute(&self, portfolio_id: Option<String>) -> WizardSnapshot {
        let wizard = match portfolio_id {
            Some(id) => match self.get_portfolio.execute(&id).await {
                Ok(portfolio) => FormWizard::edit(&portfolio),
                Err(_) => {
                    warn!(portfolio_id = %id, "Edit requested for unknown portfolio, opening blank wizard");
                    FormWizard::create()
                }
            },
            None => FormWizard::create(),
        };

        let snapshot_source = wizard.clone();
        let wizard_id = self.registry.insert(wizard).await;
        info!(%wizard_id, "Wizard session opened");

        WizardSnapshot::capture(wizard_id, &snapshot_source)
    }
}
