pub mod entities;
pub mod search;
pub mod validation;

pub use entities::{
    Portfolio, PortfolioFormData, PersonalInfo, Project, SkillCategory, Skills, SocialLinks,
    SocialPlatform, TemplateKind, Testimonial, PREVIEW_PORTFOLIO_ID,
};
pub use search::SearchScope;
pub use validation::{validate_portfolio, FieldError, ValidationErrors};
