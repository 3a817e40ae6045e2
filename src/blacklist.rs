//! Common-password blacklist.
//!
//! A small built-in deny list is always available; a larger list can be
//! loaded once at startup from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Passwords rejected even when no external blacklist file is loaded.
const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "hello",
];

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `SIGNUP_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("SIGNUP_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads the password blacklist from an external file.
///
/// Without this call the built-in list is used. The loaded set replaces
/// the built-in list entirely.
///
/// # Environment Variable
///
/// Set `SIGNUP_BLACKLIST_PATH` to specify a custom blacklist file
/// location. If not set, defaults to `./assets/common-passwords.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Loads the password blacklist from a specific file path.
///
/// Use this when the caller resolves the path itself instead of relying
/// on environment variables. Idempotent: once a list is loaded, further
/// calls return the loaded count without touching the file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, BlacklistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned snapshot of the loaded blacklist.
///
/// Returns `None` while only the built-in list is active.
pub fn get_blacklist() -> Option<HashSet<String>> {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Checks if a password is in the blacklist.
///
/// Case-insensitive exact match only; substrings do not count. Falls
/// back to the built-in list when no file has been loaded.
pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => BUILTIN_COMMON_PASSWORDS.contains(&lowered.as_str()),
    }
}

/// Resets the blacklist for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
