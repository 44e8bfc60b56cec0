use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioUseCase, GetPortfolioUseCase, ListPortfoliosUseCase,
    ResolvePortfolioViewUseCase, SavePortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub list: Arc<dyn ListPortfoliosUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub save: Arc<dyn SavePortfolioUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUseCase + Send + Sync>,
    pub resolve_view: Arc<dyn ResolvePortfolioViewUseCase + Send + Sync>,
}
