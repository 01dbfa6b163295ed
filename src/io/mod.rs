pub mod cli;
pub mod configuration;
pub mod error;
pub mod layout;
pub mod placement;
