use async_trait::async_trait;

use crate::modules::wizard::application::snapshot::WizardSnapshot;

/// Starts a session. With an id of a stored record the wizard opens in
/// edit mode; with no id, or an id that matches nothing, in create mode.
#[async_trait]
pub trait OpenWizardUseCase: Send + Sync {
    async fn execute(&self, portfolio_id: Option<String>) -> WizardSnapshot;
}
