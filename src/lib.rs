//! Password complexity checking library
//!
//! This library assigns a heuristic strength score to a candidate password
//! and returns human-readable feedback. Scoring is pure and deterministic:
//! length, character variety, and pattern checks are summed into a score,
//! the score maps to a strength tier, and every check also contributes an
//! advisory message.
//!
//! # Features
//!
//! - `async` (default): Enables an async check wrapper with cancellation support
//! - `serde`: Enables serialization of check results
//! - `tracing`: Enables logging via tracing crate
//! - `generator`: Enables random strong-password suggestions
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to a common-password wordlist file
//!   (default: `./assets/common-passwords.txt`). Loading a wordlist is
//!   optional; a built-in set is used otherwise.
//!
//! # Example
//!
//! ```rust
//! use pwd_complexity::{check_password, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyV3ryS3cur3P@ssw0rd!".to_string().into());
//! let result = check_password(&password);
//!
//! assert_eq!(result.tier, StrengthTier::Strong);
//! assert!(result.is_strong);
//! for message in &result.feedback {
//!     println!("{}", message);
//! }
//! ```

// Internal modules
mod checker;
mod sections;
mod types;
mod wordlist;

#[cfg(feature = "generator")]
mod generator;

// Public API
pub use checker::check_password;
pub use types::{ScoreResult, StrengthTier};
pub use wordlist::{
    WordlistError, get_wordlist, get_wordlist_path, init_wordlist, init_wordlist_from_path,
    is_common,
};

#[cfg(feature = "async")]
pub use checker::check_password_tx;

#[cfg(feature = "generator")]
pub use generator::{GeneratorError, SUGGESTED_LENGTH, suggest_password};
