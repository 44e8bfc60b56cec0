mod apply_wizard_action;
mod discard_wizard;
mod get_wizard;
mod open_wizard;
mod preview_wizard;
mod save_wizard;

pub use apply_wizard_action::{ApplyWizardActionError, ApplyWizardActionUseCase};
pub use discard_wizard::{DiscardWizardError, DiscardWizardUseCase};
pub use get_wizard::{GetWizardError, GetWizardUseCase};
pub use open_wizard::OpenWizardUseCase;
pub use preview_wizard::{PreviewOutcome, PreviewWizardError, PreviewWizardUseCase};
pub use save_wizard::{SaveWizardError, SaveWizardUseCase};
