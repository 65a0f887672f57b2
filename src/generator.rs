//! Strong-password suggestion utilities.

use passwords::PasswordGenerator;
use secrecy::SecretString;
use thiserror::Error;

/// Default length for suggested passwords.
pub const SUGGESTED_LENGTH: usize = 16;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to generate password: {0}")]
    Generation(&'static str),
}

/// Generates a random password suggestion of the given length.
///
/// Suggestions always mix lowercase, uppercase, digits, and symbols, so at
/// the default length they check as strong.
///
/// # Errors
///
/// Returns an error when the requested length cannot satisfy the generator
/// (e.g. zero, or too short to hold one character of every class).
pub fn suggest_password(length: usize) -> Result<SecretString, GeneratorError> {
    let generator = PasswordGenerator {
        length,
        numbers: true,
        lowercase_letters: true,
        uppercase_letters: true,
        symbols: true,
        spaces: false,
        exclude_similar_characters: false,
        strict: true,
        ..PasswordGenerator::new()
    };

    let password = generator
        .generate_one()
        .map_err(GeneratorError::Generation)?;

    Ok(SecretString::new(password.into()))
}
