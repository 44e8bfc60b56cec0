use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Reserved id under which an unsaved draft is rendered.
pub const PREVIEW_PORTFOLIO_ID: &str = "preview";

pub const MAX_RATING: u8 = 5;
pub const MIN_RATING: u8 = 1;

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    #[schema(example = "Ann Lee")]
    pub name: String,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Project {
    /// A blank project with a fresh id, as added from the projects step.
    pub fn blank() -> Self {
        Self {
            id: generate_id(),
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            live_url: Some(String::new()),
            github_url: Some(String::new()),
        }
    }

    /// Replaces the technology list from a comma separated input,
    /// dropping blank entries.
    pub fn set_technologies_from_csv(&mut self, input: &str) {
        self.technologies = input
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_string)
            .collect();
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Tools => "Tools & Software",
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Skills {
    pub fn list(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    fn list_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Adds a trimmed skill. Returns `false` when the value is blank or
    /// already present in that category.
    pub fn add(&mut self, category: SkillCategory, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }

        let list = self.list_mut(category);
        if list.iter().any(|existing| existing == skill) {
            return false;
        }

        list.push(skill.to_string());
        true
    }

    /// Removes every entry equal to `skill`. Returns whether anything changed.
    pub fn remove(&mut self, category: SkillCategory, skill: &str) -> bool {
        let list = self.list_mut(category);
        let before = list.len();
        list.retain(|existing| existing != skill);
        list.len() != before
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.tools.iter())
    }
}

fn default_rating() -> u8 {
    MAX_RATING
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub text: String,
    #[serde(default = "default_rating")]
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: u8,
}

impl Testimonial {
    pub fn blank() -> Self {
        Self {
            id: generate_id(),
            client_name: String::new(),
            company: String::new(),
            text: String::new(),
            rating: MAX_RATING,
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.clamp(MIN_RATING, MAX_RATING);
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Twitter,
    Website,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "LinkedIn Profile",
            SocialPlatform::Github => "GitHub Profile",
            SocialPlatform::Twitter => "Twitter/X Profile",
            SocialPlatform::Website => "Personal Website",
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let link = match platform {
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Github => &self.github,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Website => &self.website,
        };
        link.as_deref().filter(|url| !url.is_empty())
    }

    /// Sets one link. An empty value clears it.
    pub fn set(&mut self, platform: SocialPlatform, value: &str) {
        let value = (!value.is_empty()).then(|| value.to_string());
        match platform {
            SocialPlatform::Linkedin => self.linkedin = value,
            SocialPlatform::Github => self.github = value,
            SocialPlatform::Twitter => self.twitter = value,
            SocialPlatform::Website => self.website = value,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Modern,
    Creative,
}

/// Everything the wizard edits. A `Portfolio` minus identity and timestamps.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioFormData {
    pub personal_info: PersonalInfo,
    pub bio: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub template: TemplateKind,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub personal_info: PersonalInfo,
    pub bio: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub template: TemplateKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    pub fn from_form(
        id: String,
        data: PortfolioFormData,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            personal_info: data.personal_info,
            bio: data.bio,
            projects: data.projects,
            skills: data.skills,
            testimonials: data.testimonials,
            social_links: data.social_links,
            template: data.template,
            created_at,
            updated_at,
        }
    }

    pub fn form_data(&self) -> PortfolioFormData {
        PortfolioFormData {
            personal_info: self.personal_info.clone(),
            bio: self.bio.clone(),
            projects: self.projects.clone(),
            skills: self.skills.clone(),
            testimonials: self.testimonials.clone(),
            social_links: self.social_links.clone(),
            template: self.template,
        }
    }

    /// Prompt shown before a delete is confirmed.
    pub fn delete_confirmation(&self) -> String {
        format!(
            "Are you sure you want to delete {}'s portfolio?",
            self.personal_info.name
        )
    }
}
