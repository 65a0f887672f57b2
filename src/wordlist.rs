//! Common-password wordlist module
//!
//! Holds the set of known-weak passwords consulted during pattern checks.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in fallback entries, used until a wordlist file is loaded.
const DEFAULT_COMMON_PASSWORDS: [&str; 10] = [
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
];

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads the common-password wordlist from an external file.
///
/// Without this call the checker falls back to a small built-in set, so
/// loading a file is optional.
///
/// # Environment Variable
///
/// Set `PWD_WORDLIST_PATH` to specify a custom wordlist file location.
/// If not set, defaults to `./assets/common-passwords.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads the common-password wordlist from a specific file path.
///
/// Use this when you need to pass the path directly (e.g., from an asset
/// system) instead of relying on environment variables.
///
/// # Arguments
///
/// * `path` - Path to the wordlist file
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    // Idempotent: once loaded, later calls return the current count
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if guard.is_some() {
            return Ok(guard.as_ref().map(|s| s.len()).unwrap_or(0));
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
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
    tracing::info!("Wordlist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the loaded wordlist.
///
/// Returns `None` if no wordlist file has been loaded.
pub fn get_wordlist() -> Option<HashSet<String>> {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Checks if a password is in the common-password set (case-insensitive).
///
/// Consults the loaded wordlist when one has been initialized, otherwise
/// the built-in defaults.
pub fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => DEFAULT_COMMON_PASSWORDS.contains(&lowered.as_str()),
    }
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
