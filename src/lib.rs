pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use tracing::Level;

pub use crate::models::{GroupCategory, GroupInput, GroupPrivacy, SanitizedGroup};
pub use crate::utils::{escape_html, escape_json_value, sanitize_text};
pub use crate::validation::{
    FieldVerdict, GroupVerdict, ValidationError, ValidationResult, sanitize_and_validate_group,
    validate_group_category, validate_group_description, validate_group_name,
    validate_group_privacy,
};

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &Config) -> AppResult<()> {
    let logging = config.logging();
    let level = match logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout 留给输出结果
    let installed = match logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| AppError::config(format!("Failed to install tracing subscriber: {}", e)))
}
