use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::domain::{PortfolioFormData, ValidationErrors};
use crate::modules::wizard::domain::{FormWizard, WizardMode, WizardProgress, WizardStep};

#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WizardModeKind {
    Create,
    Edit,
}

/// Everything a client needs to render the current wizard screen.
#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct WizardSnapshot {
    pub id: Uuid,
    pub mode: WizardModeKind,
    /// Id of the record being edited; absent in create mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
    pub heading: &'static str,
    pub current_step: WizardStep,
    pub step_label: &'static str,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub progress: WizardProgress,
    pub draft: PortfolioFormData,
    #[schema(value_type = Object)]
    pub errors: ValidationErrors,
}

impl WizardSnapshot {
    pub fn capture(id: Uuid, wizard: &FormWizard) -> Self {
        let (mode, portfolio_id) = match wizard.mode() {
            WizardMode::Create => (WizardModeKind::Create, None),
            WizardMode::Edit { id, .. } => (WizardModeKind::Edit, Some(id.clone())),
        };
        let step = wizard.current_step();

        Self {
            id,
            mode,
            portfolio_id,
            heading: wizard.heading(),
            current_step: step,
            step_label: step.label(),
            is_first_step: step.is_first(),
            is_last_step: step.is_last(),
            progress: wizard.progress(),
            draft: wizard.draft().clone(),
            errors: wizard.errors().clone(),
        }
    }
}
