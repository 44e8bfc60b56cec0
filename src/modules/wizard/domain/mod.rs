pub mod actions;
pub mod form_wizard;
pub mod steps;

pub use actions::{WizardAction, WizardActionError};
pub use form_wizard::{
    BlockedSubmission, FormWizard, ProjectUpdate, StepProgress, StepStatus, SubmitPurpose,
    TestimonialUpdate, WizardMode, WizardProgress,
};
pub use steps::WizardStep;
