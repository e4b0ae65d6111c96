use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("PARKDEMAND_LOG_LEVEL", "info");

    let phq_access_token = optional("PHQ_ACCESS_TOKEN");
    let phq_base_url = or_default("PARKDEMAND_PHQ_BASE_URL", "https://api.predicthq.com/");
    let request_timeout_secs = parse_u64("PARKDEMAND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PARKDEMAND_USER_AGENT",
        "parkdemand/0.1 (parking-demand-demo)",
    );

    let radius_cache_capacity = parse_usize("PARKDEMAND_RADIUS_CACHE_CAPACITY", "64")?;
    if radius_cache_capacity == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PARKDEMAND_RADIUS_CACHE_CAPACITY".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let code_examples_dir = optional("PARKDEMAND_CODE_EXAMPLES_DIR").map(PathBuf::from);
    let session_path = PathBuf::from(or_default(
        "PARKDEMAND_SESSION_PATH",
        ".parkdemand-session.json",
    ));

    Ok(AppConfig {
        log_level,
        phq_access_token,
        phq_base_url,
        request_timeout_secs,
        user_agent,
        radius_cache_capacity,
        code_examples_dir,
        session_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
