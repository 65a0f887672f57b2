//! Pattern section - penalizes common passwords, sequential runs, repeated runs.

use secrecy::{ExposeSecret, SecretString};

use crate::wordlist::is_common;

/// Checks for a strictly ascending run of 3 consecutive code points
/// (e.g. "abc", "123").
pub fn has_sequential_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(3).any(|w| {
        let first = w[0] as u32;
        (w[1] as u32) == first + 1 && (w[2] as u32) == first + 2
    })
}

/// Checks for 3 consecutive identical characters (e.g. "aaa", "111").
pub fn has_repeated_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Scores pattern weaknesses as a penalty.
///
/// Only the first matching check applies: a common-set password costs 10
/// points and ends the analysis, otherwise a sequential run costs 5,
/// otherwise a repeated run costs 5.
pub fn pattern_penalty(password: &SecretString) -> i64 {
    let pwd = password.expose_secret();

    if is_common(pwd) {
        return -10;
    }

    if has_sequential_run(pwd) {
        return -5;
    }

    if has_repeated_run(pwd) {
        return -5;
    }

    0
}

/// Feedback messages for pattern weaknesses.
///
/// Unlike the penalty, both run checks are reported when they match.
pub fn pattern_feedback(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut feedback = Vec::new();

    if has_sequential_run(pwd) {
        feedback.push("Avoid sequential characters (abc, 123)".to_string());
    }
    if has_repeated_run(pwd) {
        feedback.push("Avoid repeated characters (aaa, 111)".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_has_sequential_run() {
        assert!(has_sequential_run("abc"));
        assert!(has_sequential_run("xx123xx"));
        assert!(has_sequential_run("xyz!"));
        assert!(!has_sequential_run("acegik"));
        assert!(!has_sequential_run("cba"));
        assert!(!has_sequential_run("ab"));
        assert!(!has_sequential_run(""));
    }

    #[test]
    fn test_has_repeated_run() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("pass111word"));
        assert!(!has_repeated_run("aabb"));
        assert!(!has_repeated_run("aa"));
        assert!(!has_repeated_run(""));
    }

    #[test]
    #[serial]
    fn test_penalty_common_password() {
        crate::wordlist::reset_wordlist_for_testing();
        assert_eq!(pattern_penalty(&secret("password")), -10);
        assert_eq!(pattern_penalty(&secret("QWERTY")), -10);
    }

    #[test]
    #[serial]
    fn test_penalty_common_beats_sequential() {
        crate::wordlist::reset_wordlist_for_testing();
        // "abc123" is both common and sequential; the common penalty wins
        assert_eq!(pattern_penalty(&secret("abc123")), -10);
    }

    #[test]
    #[serial]
    fn test_penalty_sequential_run() {
        crate::wordlist::reset_wordlist_for_testing();
        assert_eq!(pattern_penalty(&secret("abcdef")), -5);
    }

    #[test]
    #[serial]
    fn test_penalty_sequential_beats_repeated() {
        crate::wordlist::reset_wordlist_for_testing();
        // contains both "aaa" and "123"; only the sequential penalty applies
        assert_eq!(pattern_penalty(&secret("aaa123")), -5);
    }

    #[test]
    #[serial]
    fn test_penalty_repeated_run() {
        crate::wordlist::reset_wordlist_for_testing();
        assert_eq!(pattern_penalty(&secret("aaabbb")), -5);
    }

    #[test]
    #[serial]
    fn test_penalty_clean_password() {
        crate::wordlist::reset_wordlist_for_testing();
        assert_eq!(pattern_penalty(&secret("RandomPass!WordX2")), 0);
        assert_eq!(pattern_penalty(&secret("xy")), 0);
    }

    #[test]
    fn test_pattern_feedback_reports_both_runs() {
        let feedback = pattern_feedback(&secret("aaa123"));
        assert_eq!(
            feedback,
            vec![
                "Avoid sequential characters (abc, 123)",
                "Avoid repeated characters (aaa, 111)",
            ]
        );
    }

    #[test]
    fn test_pattern_feedback_clean_password() {
        assert!(pattern_feedback(&secret("RandomPass!WordX2")).is_empty());
    }
}
