use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::steps::WizardStep;
use crate::modules::portfolio::domain::entities::generate_id;
use crate::modules::portfolio::domain::validation::{BIO_FIELD, PERSONAL_INFO_FIELD};
use crate::modules::portfolio::domain::{
    validate_portfolio, PersonalInfo, Portfolio, PortfolioFormData, Project, SkillCategory,
    SocialPlatform, TemplateKind, Testimonial, ValidationErrors, PREVIEW_PORTFOLIO_ID,
};

//
// ──────────────────────────────────────────────────────────
// Modes and outcomes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    /// Editing a stored record; its identity and creation time are kept.
    Edit {
        id: String,
        created_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPurpose {
    Save,
    Preview,
}

impl SubmitPurpose {
    fn verb(self) -> &'static str {
        match self {
            SubmitPurpose::Save => "saving",
            SubmitPurpose::Preview => "previewing",
        }
    }
}

/// Returned when Save/Preview is refused because the draft has errors.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct BlockedSubmission {
    #[schema(value_type = Object)]
    pub errors: ValidationErrors,
    pub error_count: usize,
    /// Step the wizard moved to (or stayed on).
    pub step: WizardStep,
    pub message: String,
}

impl BlockedSubmission {
    fn new(errors: ValidationErrors, step: WizardStep, purpose: SubmitPurpose) -> Self {
        let error_count = errors.len();
        let plural = if error_count > 1 { "s" } else { "" };
        let message = format!(
            "Please fix {} validation error{} before {}. Check the highlighted fields.",
            error_count,
            plural,
            purpose.verb()
        );

        Self {
            errors,
            error_count,
            step,
            message,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Slice updates
// ──────────────────────────────────────────────────────────
//

/// Partial project edit; `None` keeps the current value.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma separated, as typed into the technologies field.
    pub technologies: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialUpdate {
    pub client_name: Option<String>,
    pub company: Option<String>,
    pub text: Option<String>,
    pub rating: Option<u8>,
}

#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    pub step: WizardStep,
    pub label: &'static str,
    pub status: StepStatus,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct WizardProgress {
    /// 1-based.
    pub step_number: usize,
    pub total_steps: usize,
    pub percent_complete: u8,
    pub steps: Vec<StepProgress>,
}

//
// ──────────────────────────────────────────────────────────
// Wizard
// ──────────────────────────────────────────────────────────
//

/// Create-mode defaults: blank fields plus one sample project.
pub fn starter_draft() -> PortfolioFormData {
    PortfolioFormData {
        projects: vec![Project {
            id: generate_id(),
            title: "Sample Project".to_string(),
            description: "A sample project to demonstrate the portfolio functionality"
                .to_string(),
            technologies: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            live_url: Some(String::new()),
            github_url: Some("https://github.com/iankit-sachan".to_string()),
        }],
        ..PortfolioFormData::default()
    }
}

/// Seven-step editor around a single draft.
///
/// Navigation never blocks on validation; only [`submit`](Self::submit)
/// does.
#[derive(Debug, Clone)]
pub struct FormWizard {
    mode: WizardMode,
    draft: PortfolioFormData,
    current_step: WizardStep,
    errors: ValidationErrors,
}

impl FormWizard {
    pub fn create() -> Self {
        Self {
            mode: WizardMode::Create,
            draft: starter_draft(),
            current_step: WizardStep::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn edit(portfolio: &Portfolio) -> Self {
        Self {
            mode: WizardMode::Edit {
                id: portfolio.id.clone(),
                created_at: portfolio.created_at,
            },
            draft: portfolio.form_data(),
            current_step: WizardStep::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            WizardMode::Create => "Create New Portfolio",
            WizardMode::Edit { .. } => "Edit Portfolio",
        }
    }

    pub fn draft(&self) -> &PortfolioFormData {
        &self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Result of the most recent validation run.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    // ── navigation ──────────────────────────────────────────

    /// Re-validates, then advances unless already on the last step.
    pub fn next(&mut self) {
        self.revalidate();
        self.current_step = self.current_step.next();
    }

    pub fn previous(&mut self) {
        self.current_step = self.current_step.previous();
    }

    pub fn go_to(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    pub fn progress(&self) -> WizardProgress {
        let current = self.current_step.index();
        let step_number = current + 1;
        let steps = WizardStep::ALL
            .into_iter()
            .map(|step| StepProgress {
                step,
                label: step.label(),
                status: match step.index() {
                    i if i == current => StepStatus::Current,
                    i if i < current => StepStatus::Completed,
                    _ => StepStatus::Upcoming,
                },
            })
            .collect();

        WizardProgress {
            step_number,
            total_steps: WizardStep::COUNT,
            percent_complete: ((step_number * 100) as f64 / WizardStep::COUNT as f64).round()
                as u8,
            steps,
        }
    }

    fn revalidate(&mut self) -> &ValidationErrors {
        self.errors = validate_portfolio(&self.draft);
        &self.errors
    }

    /// Validates the whole draft regardless of the current step.
    ///
    /// On errors the wizard moves to the personal step when personal info
    /// is at fault, else to the bio step when the bio is; no other field
    /// moves it. On success the finished record is returned: a save keeps
    /// the edited record's id and creation time, a preview always uses the
    /// reserved preview id.
    pub fn submit(
        &mut self,
        purpose: SubmitPurpose,
        now: DateTime<Utc>,
    ) -> Result<Portfolio, BlockedSubmission> {
        let errors = self.revalidate().clone();

        if !errors.is_empty() {
            if errors.contains(PERSONAL_INFO_FIELD) {
                self.current_step = WizardStep::Personal;
            } else if errors.contains(BIO_FIELD) {
                self.current_step = WizardStep::Bio;
            }
            return Err(BlockedSubmission::new(errors, self.current_step, purpose));
        }

        let draft = self.draft.clone();
        let portfolio = match (purpose, &self.mode) {
            (SubmitPurpose::Preview, _) => {
                Portfolio::from_form(PREVIEW_PORTFOLIO_ID.to_string(), draft, now, now)
            }
            (SubmitPurpose::Save, WizardMode::Edit { id, created_at }) => {
                Portfolio::from_form(id.clone(), draft, *created_at, now)
            }
            (SubmitPurpose::Save, WizardMode::Create) => {
                Portfolio::from_form(generate_id(), draft, now, now)
            }
        };

        Ok(portfolio)
    }

    // ── step editors ────────────────────────────────────────

    pub fn set_template(&mut self, template: TemplateKind) {
        self.draft.template = template;
    }

    pub fn set_personal_info(&mut self, personal_info: PersonalInfo) {
        self.draft.personal_info = personal_info;
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.draft.bio = bio.into();
    }

    /// Appends a blank project and returns its id.
    pub fn add_project(&mut self) -> String {
        let project = Project::blank();
        let id = project.id.clone();
        self.draft.projects.push(project);
        id
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        let before = self.draft.projects.len();
        self.draft.projects.retain(|p| p.id != id);
        self.draft.projects.len() != before
    }

    pub fn update_project(&mut self, id: &str, update: ProjectUpdate) -> bool {
        let Some(project) = self.draft.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(technologies) = update.technologies {
            project.set_technologies_from_csv(&technologies);
        }
        if let Some(live_url) = update.live_url {
            project.live_url = Some(live_url);
        }
        if let Some(github_url) = update.github_url {
            project.github_url = Some(github_url);
        }
        true
    }

    /// Returns `false` for blank or duplicate skills.
    pub fn add_skill(&mut self, category: SkillCategory, skill: &str) -> bool {
        self.draft.skills.add(category, skill)
    }

    pub fn remove_skill(&mut self, category: SkillCategory, skill: &str) -> bool {
        self.draft.skills.remove(category, skill)
    }

    pub fn add_testimonial(&mut self) -> String {
        let testimonial = Testimonial::blank();
        let id = testimonial.id.clone();
        self.draft.testimonials.push(testimonial);
        id
    }

    pub fn remove_testimonial(&mut self, id: &str) -> bool {
        let before = self.draft.testimonials.len();
        self.draft.testimonials.retain(|t| t.id != id);
        self.draft.testimonials.len() != before
    }

    pub fn update_testimonial(&mut self, id: &str, update: TestimonialUpdate) -> bool {
        let Some(testimonial) = self.draft.testimonials.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        if let Some(client_name) = update.client_name {
            testimonial.client_name = client_name;
        }
        if let Some(company) = update.company {
            testimonial.company = company;
        }
        if let Some(text) = update.text {
            testimonial.text = text;
        }
        if let Some(rating) = update.rating {
            testimonial.set_rating(rating);
        }
        true
    }

    pub fn set_social_link(&mut self, platform: SocialPlatform, url: &str) {
        self.draft.social_links.set(platform, url);
    }
}
