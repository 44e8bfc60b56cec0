mod apply_wizard_action;
mod discard_wizard;
mod get_wizard;
mod open_wizard;
mod preview_wizard;
mod save_wizard;

pub use apply_wizard_action::*;
pub use discard_wizard::*;
pub use get_wizard::*;
pub use open_wizard::*;
pub use preview_wizard::*;
pub use save_wizard::*;
