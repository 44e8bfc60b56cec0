use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioUseCase, GetPortfolioUseCase, ListPortfoliosUseCase,
    ResolvePortfolioViewUseCase, SavePortfolioUseCase,
};
use crate::modules::wizard::application::ports::incoming::use_cases::{
    ApplyWizardActionUseCase, DiscardWizardUseCase, GetWizardUseCase, OpenWizardUseCase,
    PreviewWizardUseCase, SaveWizardUseCase,
};
use crate::modules::wizard::application::wizard_use_cases::WizardUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// `AppState` made of stubs; override only what a test exercises.
pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    wizard: WizardUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                list: Arc::new(StubListPortfoliosUseCase),
                get_single: Arc::new(StubGetPortfolioUseCase),
                save: Arc::new(StubSavePortfolioUseCase),
                delete: Arc::new(StubDeletePortfolioUseCase),
                resolve_view: Arc::new(StubResolvePortfolioViewUseCase),
            },
            wizard: WizardUseCases {
                open: Arc::new(StubOpenWizardUseCase),
                get: Arc::new(StubGetWizardUseCase),
                apply_action: Arc::new(StubApplyWizardActionUseCase),
                save: Arc::new(StubSaveWizardUseCase),
                preview: Arc::new(StubPreviewWizardUseCase),
                discard: Arc::new(StubDiscardWizardUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── portfolio ──────────────────────────────────────────

    pub fn with_list_portfolios(
        mut self,
        uc: impl ListPortfoliosUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.list = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_single = Arc::new(uc);
        self
    }

    pub fn with_save_portfolio(
        mut self,
        uc: impl SavePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.save = Arc::new(uc);
        self
    }

    pub fn with_delete_portfolio(
        mut self,
        uc: impl DeletePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.delete = Arc::new(uc);
        self
    }

    pub fn with_resolve_view(
        mut self,
        uc: impl ResolvePortfolioViewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.resolve_view = Arc::new(uc);
        self
    }

    // ── wizard ─────────────────────────────────────────────

    pub fn with_open_wizard(mut self, uc: impl OpenWizardUseCase + Send + Sync + 'static) -> Self {
        self.wizard.open = Arc::new(uc);
        self
    }

    pub fn with_get_wizard(mut self, uc: impl GetWizardUseCase + Send + Sync + 'static) -> Self {
        self.wizard.get = Arc::new(uc);
        self
    }

    pub fn with_apply_wizard_action(
        mut self,
        uc: impl ApplyWizardActionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.wizard.apply_action = Arc::new(uc);
        self
    }

    pub fn with_save_wizard(mut self, uc: impl SaveWizardUseCase + Send + Sync + 'static) -> Self {
        self.wizard.save = Arc::new(uc);
        self
    }

    pub fn with_preview_wizard(
        mut self,
        uc: impl PreviewWizardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.wizard.preview = Arc::new(uc);
        self
    }

    pub fn with_discard_wizard(
        mut self,
        uc: impl DiscardWizardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.wizard.discard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            wizard: self.wizard,
        })
    }
}
