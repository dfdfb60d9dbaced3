pub mod config;
pub mod constants;
pub mod types;

pub use config::DemoConfig;
pub use constants::*;
pub use types::*;
