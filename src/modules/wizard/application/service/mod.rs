mod apply_wizard_action_service;
mod discard_wizard_service;
mod get_wizard_service;
mod open_wizard_service;
mod preview_wizard_service;
mod save_wizard_service;

pub use apply_wizard_action_service::ApplyWizardActionService;
pub use discard_wizard_service::DiscardWizardService;
pub use get_wizard_service::GetWizardService;
pub use open_wizard_service::OpenWizardService;
pub use preview_wizard_service::PreviewWizardService;
pub use save_wizard_service::SaveWizardService;
