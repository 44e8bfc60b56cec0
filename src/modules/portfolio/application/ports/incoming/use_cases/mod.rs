mod delete_portfolio;
mod get_portfolio;
mod list_portfolios;
mod resolve_portfolio_view;
mod save_portfolio;

pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use list_portfolios::{ListPortfoliosUseCase, ListingState, PortfolioListing, PortfolioSearch};
pub use resolve_portfolio_view::{
    PortfolioView, ResolvePortfolioViewError, ResolvePortfolioViewUseCase,
};
pub use save_portfolio::{SavePortfolioError, SavePortfolioUseCase};
