use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::form_wizard::{FormWizard, ProjectUpdate, TestimonialUpdate};
use super::steps::WizardStep;
use crate::modules::portfolio::domain::{
    PersonalInfo, SkillCategory, SocialPlatform, TemplateKind,
};

/// One user interaction with the wizard, as sent by a client.
///
/// The `type` tag is snake_case; payload keys are camelCase like the
/// records they edit.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Previous,
    /// `step` is a step key, a step label, or a 0-based index.
    GoToStep {
        step: String,
    },
    SetTemplate {
        template: TemplateKind,
    },
    SetPersonalInfo {
        #[serde(rename = "personalInfo")]
        personal_info: PersonalInfo,
    },
    SetBio {
        bio: String,
    },
    AddProject,
    UpdateProject {
        id: String,
        changes: ProjectUpdate,
    },
    RemoveProject {
        id: String,
    },
    AddSkill {
        category: SkillCategory,
        skill: String,
    },
    RemoveSkill {
        category: SkillCategory,
        skill: String,
    },
    AddTestimonial,
    UpdateTestimonial {
        id: String,
        changes: TestimonialUpdate,
    },
    RemoveTestimonial {
        id: String,
    },
    SetSocialLink {
        platform: SocialPlatform,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardActionError {
    UnknownStep(String),
    ProjectNotFound(String),
    TestimonialNotFound(String),
}

impl fmt::Display for WizardActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardActionError::UnknownStep(step) => write!(f, "Unknown wizard step: {}", step),
            WizardActionError::ProjectNotFound(id) => write!(f, "Project not found: {}", id),
            WizardActionError::TestimonialNotFound(id) => {
                write!(f, "Testimonial not found: {}", id)
            }
        }
    }
}

fn resolve_step(step: &str) -> Option<WizardStep> {
    WizardStep::parse(step).or_else(|| {
        step.trim()
            .parse::<usize>()
            .ok()
            .and_then(WizardStep::from_index)
    })
}

impl WizardAction {
    /// Applies the action to `wizard`.
    ///
    /// Adding a blank or duplicate skill, or removing something already
    /// gone from a skill list, is silently ignored.
    pub fn apply(self, wizard: &mut FormWizard) -> Result<(), WizardActionError> {
        match self {
            WizardAction::Next => wizard.next(),
            WizardAction::Previous => wizard.previous(),
            WizardAction::GoToStep { step } => {
                let target = resolve_step(&step).ok_or(WizardActionError::UnknownStep(step))?;
                wizard.go_to(target);
            }
            WizardAction::SetTemplate { template } => wizard.set_template(template),
            WizardAction::SetPersonalInfo { personal_info } => {
                wizard.set_personal_info(personal_info)
            }
            WizardAction::SetBio { bio } => wizard.set_bio(bio),
            WizardAction::AddProject => {
                wizard.add_project();
            }
            WizardAction::UpdateProject { id, changes } => {
                if !wizard.update_project(&id, changes) {
                    return Err(WizardActionError::ProjectNotFound(id));
                }
            }
            WizardAction::RemoveProject { id } => {
                if !wizard.remove_project(&id) {
                    return Err(WizardActionError::ProjectNotFound(id));
                }
            }
            WizardAction::AddSkill { category, skill } => {
                wizard.add_skill(category, &skill);
            }
            WizardAction::RemoveSkill { category, skill } => {
                wizard.remove_skill(category, &skill);
            }
            WizardAction::AddTestimonial => {
                wizard.add_testimonial();
            }
            WizardAction::UpdateTestimonial { id, changes } => {
                if !wizard.update_testimonial(&id, changes) {
                    return Err(WizardActionError::TestimonialNotFound(id));
                }
            }
            WizardAction::RemoveTestimonial { id } => {
                if !wizard.remove_testimonial(&id) {
                    return Err(WizardActionError::TestimonialNotFound(id));
                }
            }
            WizardAction::SetSocialLink { platform, url } => {
                wizard.set_social_link(platform, &url)
            }
        }

        Ok(())
    }
}
