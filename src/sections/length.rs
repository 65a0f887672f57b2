//! Length section - scores password length against fixed thresholds.

use secrecy::{ExposeSecret, SecretString};

/// Scores password length.
///
/// Thresholds are inclusive lower bounds on the character count:
/// fewer than 6 scores 0, 6-7 scores 5, 8-11 scores 10, 12 or more scores 15.
pub fn length_score(password: &SecretString) -> i64 {
    match password.expose_secret().chars().count() {
        0..=5 => 0,
        6..=7 => 5,
        8..=11 => 10,
        _ => 15,
    }
}

/// Feedback message for the password's length.
pub fn length_feedback(password: &SecretString) -> String {
    let length = password.expose_secret().chars().count();
    if length < 8 {
        format!(
            "Password is too short ({} characters). Use at least 8 characters.",
            length
        )
    } else if length < 12 {
        format!(
            "Consider using a longer password ({} characters). 12+ characters recommended.",
            length
        )
    } else {
        format!("Good password length ({} characters).", length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_score_thresholds() {
        assert_eq!(length_score(&secret("abcde")), 0);
        assert_eq!(length_score(&secret("abcdef")), 5);
        assert_eq!(length_score(&secret("abcdefg")), 5);
        assert_eq!(length_score(&secret("abcdefgh")), 10);
        assert_eq!(length_score(&secret("abcdefghijk")), 10);
        assert_eq!(length_score(&secret("abcdefghijkl")), 15);
        assert_eq!(length_score(&secret(&"x".repeat(200))), 15);
    }

    #[test]
    fn test_length_score_monotonic() {
        let mut previous = length_score(&secret(""));
        for n in 1..=16 {
            let current = length_score(&secret(&"x".repeat(n)));
            assert!(current >= previous, "length {} decreased the score", n);
            previous = current;
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 6 characters, more than 6 bytes
        assert_eq!(length_score(&secret("pàsswö")), 5);
    }

    #[test]
    fn test_length_feedback_messages() {
        assert_eq!(
            length_feedback(&secret("Short1!")),
            "Password is too short (7 characters). Use at least 8 characters."
        );
        assert_eq!(
            length_feedback(&secret("MyPass123!")),
            "Consider using a longer password (10 characters). 12+ characters recommended."
        );
        assert_eq!(
            length_feedback(&secret("LongEnough123466")),
            "Good password length (16 characters)."
        );
    }
}
