use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Template,
    Personal,
    Bio,
    Projects,
    Skills,
    Testimonials,
    Social,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Template,
        WizardStep::Personal,
        WizardStep::Bio,
        WizardStep::Projects,
        WizardStep::Skills,
        WizardStep::Testimonials,
        WizardStep::Social,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            WizardStep::Template => "template",
            WizardStep::Personal => "personal",
            WizardStep::Bio => "bio",
            WizardStep::Projects => "projects",
            WizardStep::Skills => "skills",
            WizardStep::Testimonials => "testimonials",
            WizardStep::Social => "social",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Template => "Template",
            WizardStep::Personal => "Personal Info",
            WizardStep::Bio => "About",
            WizardStep::Projects => "Projects",
            WizardStep::Skills => "Skills",
            WizardStep::Testimonials => "Testimonials",
            WizardStep::Social => "Social Links",
        }
    }

    /// Accepts a step key (`bio`) or its label (`About`), case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.key().eq_ignore_ascii_case(name) || step.label().eq_ignore_ascii_case(name))
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::COUNT - 1
    }
}
