/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;

/// Durable key-value store holding the credential pair and the user profile
///
/// Implementations must be safe to share between tasks. Values are plain
/// strings; the profile is stored as serialized JSON.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`. Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Side-effect seam for sending the operator back to the login entry point
pub trait Navigator: Send + Sync {
    /// Location currently displayed
    fn current_location(&self) -> String;

    /// Moves to `path`
    fn navigate(&self, path: &str);
}
