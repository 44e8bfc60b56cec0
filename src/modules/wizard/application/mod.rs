pub mod ports;
pub mod registry;
pub mod service;
pub mod snapshot;
pub mod wizard_use_cases;
