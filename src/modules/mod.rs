pub mod portfolio;
pub mod wizard;
