use log::debug;
use std::env;

/// Read an environment variable with fallback to a default value
///
/// Centralizes the fallback logic, including handling of `PORTAL_` prefixed
/// variables used by deployment scripts.
///
/// Arguments:
/// * `key` - The environment variable name without any prefix
/// * `default` - The default value to use if the variable is not found
/// * `prefer_unprefixed` - Whether to prefer the unprefixed version over `PORTAL_` prefixed
///
/// Returns:
/// The environment variable value or the default
pub fn read_env(key: &str, default: &str, prefer_unprefixed: bool) -> String {
    let env_var = if prefer_unprefixed {
        env::var(key).or_else(|_| env::var(format!("PORTAL_{}", key)))
    } else {
        env::var(format!("PORTAL_{}", key)).or_else(|_| env::var(key))
    };

    let value = env_var.unwrap_or_else(|_| default.to_string());

    debug!("Environment variable {} resolved to: {}", key, value);
    value
}
