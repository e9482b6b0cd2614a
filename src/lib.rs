// Library exports for testing and the warp-wizard binary

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod activation;
pub mod cli;
pub mod placeholders;
pub mod prompt;
pub mod wizard;

pub use warp_wizard_config as config;
pub use warp_wizard_layout as layout;
