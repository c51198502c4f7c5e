pub mod app_config;
pub mod config;
pub mod position;
pub mod status;
pub mod venue;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use position::{Coordinates, Position};
pub use status::{StatusMap, VenueStatus};
pub use venue::{RawVenue, Venue};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
