/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// Unset and blank variables yield the default silently; a value that fails
/// to parse is reported with `warn!` before the default is used.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_non_blank(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Ignoring {}={}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Reads and parses an environment variable, returning `None` when unset,
/// blank or unparsable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_non_blank(env_var).and_then(|val| val.parse::<T>().ok())
}

fn read_non_blank(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
