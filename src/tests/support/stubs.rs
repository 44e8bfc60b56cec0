use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase, GetPortfolioError, GetPortfolioUseCase,
    ListPortfoliosUseCase, ListingState, PortfolioListing, PortfolioSearch, PortfolioView,
    ResolvePortfolioViewError, ResolvePortfolioViewUseCase, SavePortfolioError,
    SavePortfolioUseCase,
};
use crate::modules::portfolio::domain::Portfolio;
use crate::modules::wizard::application::ports::incoming::use_cases::{
    ApplyWizardActionError, ApplyWizardActionUseCase, DiscardWizardError, DiscardWizardUseCase,
    GetWizardError, GetWizardUseCase, OpenWizardUseCase, PreviewOutcome, PreviewWizardError,
    PreviewWizardUseCase, SaveWizardError, SaveWizardUseCase,
};
use crate::modules::wizard::application::snapshot::WizardSnapshot;
use crate::modules::wizard::domain::{FormWizard, WizardAction};

//
// ──────────────────────────────────────────────────────────
// Portfolio stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubListPortfoliosUseCase;

#[async_trait]
impl ListPortfoliosUseCase for StubListPortfoliosUseCase {
    async fn execute(&self, _search: PortfolioSearch) -> PortfolioListing {
        PortfolioListing::new(ListingState::Empty, 0, Vec::new())
    }
}

#[derive(Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self, _id: &str) -> Result<Portfolio, GetPortfolioError> {
        Err(GetPortfolioError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSavePortfolioUseCase;

#[async_trait]
impl SavePortfolioUseCase for StubSavePortfolioUseCase {
    async fn execute(&self, portfolio: Portfolio) -> Result<Portfolio, SavePortfolioError> {
        Ok(portfolio)
    }
}

#[derive(Clone)]
pub struct StubDeletePortfolioUseCase;

#[async_trait]
impl DeletePortfolioUseCase for StubDeletePortfolioUseCase {
    async fn execute(&self, _id: &str) -> Result<(), DeletePortfolioError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct StubResolvePortfolioViewUseCase;

#[async_trait]
impl ResolvePortfolioViewUseCase for StubResolvePortfolioViewUseCase {
    async fn execute(&self, _id: &str) -> Result<PortfolioView, ResolvePortfolioViewError> {
        Err(ResolvePortfolioViewError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Wizard stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubOpenWizardUseCase;

#[async_trait]
impl OpenWizardUseCase for StubOpenWizardUseCase {
    async fn execute(&self, _portfolio_id: Option<String>) -> WizardSnapshot {
        WizardSnapshot::capture(Uuid::nil(), &FormWizard::create())
    }
}

#[derive(Clone)]
pub struct StubGetWizardUseCase;

#[async_trait]
impl GetWizardUseCase for StubGetWizardUseCase {
    async fn execute(&self, _wizard_id: Uuid) -> Result<WizardSnapshot, GetWizardError> {
        Err(GetWizardError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubApplyWizardActionUseCase;

#[async_trait]
impl ApplyWizardActionUseCase for StubApplyWizardActionUseCase {
    async fn execute(
        &self,
        _wizard_id: Uuid,
        _action: WizardAction,
    ) -> Result<WizardSnapshot, ApplyWizardActionError> {
        Err(ApplyWizardActionError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSaveWizardUseCase;

#[async_trait]
impl SaveWizardUseCase for StubSaveWizardUseCase {
    async fn execute(&self, _wizard_id: Uuid) -> Result<Portfolio, SaveWizardError> {
        Err(SaveWizardError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubPreviewWizardUseCase;

#[async_trait]
impl PreviewWizardUseCase for StubPreviewWizardUseCase {
    async fn execute(&self, _wizard_id: Uuid) -> Result<PreviewOutcome, PreviewWizardError> {
        Err(PreviewWizardError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubDiscardWizardUseCase;

#[async_trait]
impl DiscardWizardUseCase for StubDiscardWizardUseCase {
    async fn execute(&self, _wizard_id: Uuid) -> Result<(), DiscardWizardError> {
        Err(DiscardWizardError::NotFound)
    }
}
