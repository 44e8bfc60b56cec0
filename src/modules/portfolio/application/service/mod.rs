mod delete_portfolio_service;
mod get_portfolio_service;
mod list_portfolios_service;
mod resolve_portfolio_view_service;
mod save_portfolio_service;

pub use delete_portfolio_service::DeletePortfolioService;
pub use get_portfolio_service::GetPortfolioService;
pub use list_portfolios_service::ListPortfoliosService;
pub use resolve_portfolio_view_service::ResolvePortfolioViewService;
pub use save_portfolio_service::SavePortfolioService;
