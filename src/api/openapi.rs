use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::portfolio::adapter::incoming::web::routes::{
    PortfolioCardDto, PortfolioListResponse, ValidationReport,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::ListingState;
use crate::modules::portfolio::domain::{
    PersonalInfo, Portfolio, PortfolioFormData, Project, SearchScope, SkillCategory, Skills,
    SocialLinks, SocialPlatform, TemplateKind, Testimonial,
};
use crate::modules::wizard::adapter::incoming::web::routes::OpenWizardRequest;
use crate::modules::wizard::application::ports::incoming::use_cases::PreviewOutcome;
use crate::modules::wizard::application::snapshot::{WizardModeKind, WizardSnapshot};
use crate::modules::wizard::domain::{
    BlockedSubmission, ProjectUpdate, StepProgress, StepStatus, TestimonialUpdate, WizardAction,
    WizardProgress, WizardStep,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Generator API",
        version = "1.0.0",
        description = "Create, edit, preview and render personal portfolios"
    ),
    paths(
        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolios_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_by_id_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::delete_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::validate_portfolio_handler,

        // Wizard endpoints
        crate::modules::wizard::adapter::incoming::web::routes::open_wizard_handler,
        crate::modules::wizard::adapter::incoming::web::routes::get_wizard_handler,
        crate::modules::wizard::adapter::incoming::web::routes::apply_wizard_action_handler,
        crate::modules::wizard::adapter::incoming::web::routes::save_wizard_handler,
        crate::modules::wizard::adapter::incoming::web::routes::preview_wizard_handler,
        crate::modules::wizard::adapter::incoming::web::routes::discard_wizard_handler,

        // Pages
        crate::modules::portfolio::adapter::incoming::web::routes::view_portfolio_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Portfolio
            Portfolio,
            PortfolioFormData,
            PersonalInfo,
            Project,
            Skills,
            SkillCategory,
            Testimonial,
            SocialLinks,
            SocialPlatform,
            TemplateKind,
            SearchScope,
            ListingState,
            PortfolioCardDto,
            PortfolioListResponse,
            ValidationReport,

            // Wizard
            OpenWizardRequest,
            WizardSnapshot,
            WizardModeKind,
            WizardStep,
            WizardProgress,
            StepProgress,
            StepStatus,
            WizardAction,
            ProjectUpdate,
            TestimonialUpdate,
            BlockedSubmission,
            PreviewOutcome
        )
    ),
    tags(
        (name = "portfolios", description = "Stored portfolio collection"),
        (name = "wizards", description = "Seven-step create/edit wizard sessions"),
        (name = "pages", description = "Rendered HTML pages"),
    )
)]
pub struct ApiDoc;
