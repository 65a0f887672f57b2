//! Character variety section - scores uppercase, lowercase, digit, special presence.

use secrecy::{ExposeSecret, SecretString};

/// Special characters recognized by the variety check.
///
/// Only this fixed set and the ASCII ranges a-z, A-Z, 0-9 count toward a
/// character class; anything else (accented letters included) matches none.
pub(crate) const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Scores character variety.
///
/// Each present class contributes 5 points independently, 20 max.
pub fn variety_score(password: &SecretString) -> i64 {
    let pwd = password.expose_secret();
    let mut score = 0;

    if has_lowercase(pwd) {
        score += 5;
    }
    if has_uppercase(pwd) {
        score += 5;
    }
    if has_digit(pwd) {
        score += 5;
    }
    if has_special(pwd) {
        score += 5;
    }

    score
}

/// Feedback messages for the absent character classes, one per class.
pub fn variety_feedback(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut feedback = Vec::new();

    if !has_lowercase(pwd) {
        feedback.push("Add lowercase letters (a-z)".to_string());
    }
    if !has_uppercase(pwd) {
        feedback.push("Add uppercase letters (A-Z)".to_string());
    }
    if !has_digit(pwd) {
        feedback.push("Add numbers (0-9)".to_string());
    }
    if !has_special(pwd) {
        feedback.push("Add special characters (!@#$%^&*)".to_string());
    }

    feedback
}
