use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entities::PortfolioFormData;

pub const MAX_BIO_CHARS: usize = 500;

pub const PERSONAL_INFO_FIELD: &str = "personalInfo";
pub const BIO_FIELD: &str = "bio";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldError {
    Message(String),
    Nested(ValidationErrors),
}

/// Field-keyed error tree. Empty means the draft may be persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level keys. A nested group counts once.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Looks up a message by dotted path, e.g. `personalInfo.email`.
    pub fn message(&self, path: &str) -> Option<&str> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        match (self.0.get(head)?, rest) {
            (FieldError::Message(msg), None) => Some(msg.as_str()),
            (FieldError::Nested(nested), Some(rest)) => nested.message(rest),
            _ => None,
        }
    }

    pub fn insert_message(&mut self, field: &str, message: &str) {
        self.0
            .insert(field.to_string(), FieldError::Message(message.to_string()));
    }

    /// Attaches a nested group, skipping it when it holds no errors.
    pub fn insert_nested(&mut self, field: &str, nested: ValidationErrors) {
        if !nested.is_empty() {
            self.0.insert(field.to_string(), FieldError::Nested(nested));
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Checks the draft against the persistence rules.
///
/// Only personal name, title, email and the bio are checked; every other
/// field is accepted as-is.
pub fn validate_portfolio(data: &PortfolioFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let info = &data.personal_info;
    let mut personal = ValidationErrors::new();
    if info.name.trim().is_empty() {
        personal.insert_message("name", "Name is required");
    }
    if info.title.trim().is_empty() {
        personal.insert_message("title", "Title is required");
    }
    if info.email.trim().is_empty() {
        personal.insert_message("email", "Email is required");
    } else if !is_valid_email(&info.email) {
        personal.insert_message("email", "Invalid email format");
    }
    errors.insert_nested(PERSONAL_INFO_FIELD, personal);

    if data.bio.trim().is_empty() {
        errors.insert_message(BIO_FIELD, "Bio is required");
    } else if data.bio.chars().count() > MAX_BIO_CHARS {
        errors.insert_message(BIO_FIELD, "Bio must be less than 500 characters");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::entities::{
        PersonalInfo, Project, SkillCategory, SocialPlatform, Testimonial, TemplateKind,
    };

    fn valid_draft() -> PortfolioFormData {
        PortfolioFormData {
            personal_info: PersonalInfo {
                name: "Ann".to_string(),
                title: "Eng".to_string(),
                email: "ann@example.com".to_string(),
                phone: String::new(),
                location: String::new(),
            },
            bio: "Builds things.".to_string(),
            ..PortfolioFormData::default()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_portfolio(&valid_draft()).is_empty());
    }

    #[test]
    fn test_bad_email_and_empty_bio_scenario() {
        let mut draft = valid_draft();
        draft.personal_info.email = "bad-email".to_string();
        draft.bio = String::new();

        let errors = validate_portfolio(&draft);

        assert_eq!(
            errors.message("personalInfo.email"),
            Some("Invalid email format")
        );
        assert_eq!(errors.message("bio"), Some("Bio is required"));
        assert!(errors.message("personalInfo.name").is_none());
        assert!(errors.message("personalInfo.title").is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let mut draft = valid_draft();
        draft.personal_info.name = "   ".to_string();
        draft.personal_info.title = "\t".to_string();
        draft.personal_info.email = " ".to_string();

        let errors = validate_portfolio(&draft);

        assert_eq!(errors.message("personalInfo.name"), Some("Name is required"));
        assert_eq!(errors.message("personalInfo.title"), Some("Title is required"));
        assert_eq!(errors.message("personalInfo.email"), Some("Email is required"));
        // nested group counts once
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_bio_length_boundary() {
        let mut draft = valid_draft();

        draft.bio = "a".repeat(MAX_BIO_CHARS);
        assert!(validate_portfolio(&draft).is_empty());

        draft.bio = "a".repeat(MAX_BIO_CHARS + 1);
        assert_eq!(
            validate_portfolio(&draft).message("bio"),
            Some("Bio must be less than 500 characters")
        );
    }

    #[test]
    fn test_bio_length_counts_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.bio = "é".repeat(MAX_BIO_CHARS);

        assert!(validate_portfolio(&draft).is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
    }

    #[test]
    fn test_other_fields_are_never_checked() {
        let mut draft = valid_draft();
        draft.projects = vec![Project::blank(), Project::blank()];
        draft.testimonials = vec![Testimonial::blank()];
        draft.skills.add(SkillCategory::Technical, "Rust");
        draft.social_links.set(SocialPlatform::Website, "not a url");
        draft.personal_info.phone = "???".to_string();
        draft.template = TemplateKind::Creative;

        assert!(validate_portfolio(&draft).is_empty());
    }

    #[test]
    fn test_errors_serialize_as_nested_tree() {
        let mut draft = valid_draft();
        draft.personal_info.name = String::new();
        draft.bio = String::new();

        let json = serde_json::to_value(validate_portfolio(&draft)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "bio": "Bio is required",
                "personalInfo": { "name": "Name is required" }
            })
        );
    }
}
