mod delete_portfolio;
mod get_portfolios;
mod get_single_portfolio;
mod validate_portfolio;
mod view_portfolio;

pub use delete_portfolio::*;
pub use get_portfolios::*;
pub use get_single_portfolio::*;
pub use validate_portfolio::*;
pub use view_portfolio::*;
