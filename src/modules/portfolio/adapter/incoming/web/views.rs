use askama::Template;

use crate::modules::portfolio::domain::entities::MAX_RATING;
use crate::modules::portfolio::domain::{Portfolio, SkillCategory, SocialPlatform, TemplateKind};

/// Flattened, display-ready copy of a portfolio. Optional values are empty
/// strings so the templates only need `is_empty` checks.
pub struct PortfolioPage {
    pub name: String,
    pub initials: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub projects: Vec<ProjectCard>,
    pub skill_groups: Vec<SkillGroup>,
    pub testimonials: Vec<TestimonialCard>,
    pub social_links: Vec<SocialLinkView>,
    /// Persisted pages link back to the list; previews do not.
    pub show_back_link: bool,
    pub is_preview: bool,
}

pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: Vec<String>,
}

pub struct TestimonialCard {
    pub client_name: String,
    pub company: String,
    pub text: String,
    pub stars: String,
}

pub struct SocialLinkView {
    pub label: &'static str,
    pub url: String,
}

const SOCIAL_ORDER: [SocialPlatform; 4] = [
    SocialPlatform::Linkedin,
    SocialPlatform::Github,
    SocialPlatform::Twitter,
    SocialPlatform::Website,
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returns `url` when it is relative or uses a safe scheme, otherwise an
/// empty string so the link is not rendered.
fn safe_link(url: &str) -> String {
    let trimmed = url.trim_matches(|c: char| c.is_whitespace() || c.is_control());
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));

    match scheme_end {
        Some(end) if trimmed[end..].starts_with(':') => {
            let scheme = trimmed[..end].to_ascii_lowercase();
            if SAFE_SCHEMES.contains(&scheme.as_str()) {
                trimmed.to_string()
            } else {
                String::new()
            }
        }
        _ => trimmed.to_string(),
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

impl PortfolioPage {
    pub fn new(portfolio: &Portfolio, is_preview: bool) -> Self {
        let info = &portfolio.personal_info;

        let projects = portfolio
            .projects
            .iter()
            .map(|p| ProjectCard {
                title: p.title.clone(),
                description: p.description.clone(),
                technologies: p.technologies.clone(),
                live_url: p.live_url.as_deref().map(safe_link).unwrap_or_default(),
                github_url: p.github_url.as_deref().map(safe_link).unwrap_or_default(),
            })
            .collect();

        let skill_groups = SkillCategory::ALL
            .into_iter()
            .filter(|category| !portfolio.skills.list(*category).is_empty())
            .map(|category| SkillGroup {
                title: category.title(),
                skills: portfolio.skills.list(category).to_vec(),
            })
            .collect();

        let testimonials = portfolio
            .testimonials
            .iter()
            .map(|t| TestimonialCard {
                client_name: t.client_name.clone(),
                company: t.company.clone(),
                text: t.text.clone(),
                stars: stars(t.rating),
            })
            .collect();

        let social_links = SOCIAL_ORDER
            .into_iter()
            .filter_map(|platform| {
                let url = safe_link(portfolio.social_links.get(platform)?);
                (!url.is_empty()).then(|| SocialLinkView {
                    label: platform.label(),
                    url,
                })
            })
            .collect();

        Self {
            name: info.name.clone(),
            initials: initials(&info.name),
            title: info.title.clone(),
            email: info.email.clone(),
            phone: info.phone.clone(),
            location: info.location.clone(),
            bio: portfolio.bio.clone(),
            projects,
            skill_groups,
            testimonials,
            social_links,
            show_back_link: !is_preview,
            is_preview,
        }
    }
}

#[derive(Template)]
#[template(path = "modern.html")]
pub struct ModernTemplate {
    pub page: PortfolioPage,
}

#[derive(Template)]
#[template(path = "creative.html")]
pub struct CreativeTemplate {
    pub page: PortfolioPage,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Renders through the layout the record asks for.
pub fn render_portfolio(portfolio: &Portfolio, is_preview: bool) -> askama::Result<String> {
    let page = PortfolioPage::new(portfolio, is_preview);
    match portfolio.template {
        TemplateKind::Creative => CreativeTemplate { page }.render(),
        TemplateKind::Modern => ModernTemplate { page }.render(),
    }
}

pub fn render_not_found() -> askama::Result<String> {
    NotFoundTemplate.render()
}
