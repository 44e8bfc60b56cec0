use std::sync::Arc;

use crate::modules::wizard::application::ports::incoming::use_cases::{
    ApplyWizardActionUseCase, DiscardWizardUseCase, GetWizardUseCase, OpenWizardUseCase,
    PreviewWizardUseCase, SaveWizardUseCase,
};

#[derive(Clone)]
pub struct WizardUseCases {
    pub open: Arc<dyn OpenWizardUseCase + Send + Sync>,
    pub get: Arc<dyn GetWizardUseCase + Send + Sync>,
    pub apply_action: Arc<dyn ApplyWizardActionUseCase + Send + Sync>,
    pub save: Arc<dyn SaveWizardUseCase + Send + Sync>,
    pub preview: Arc<dyn PreviewWizardUseCase + Send + Sync>,
    pub discard: Arc<dyn DiscardWizardUseCase + Send + Sync>,
}
