//! Password checker - main scoring and feedback logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    length_feedback, length_score, pattern_feedback, pattern_penalty, variety_feedback,
    variety_score,
};
use crate::types::{ScoreResult, StrengthTier};

/// Checks password strength and returns a scored result with feedback.
///
/// Total over any input: empty strings take a short-circuit result and
/// arbitrary Unicode is accepted. The sub-scores are length (0-15),
/// character variety (0-20), and a pattern penalty (-10-0), so the total
/// stays within [-10, 50].
///
/// # Arguments
/// * `password` - The password to check
///
/// # Returns
/// A `ScoreResult` containing tier, score, feedback, and the strong flag.
pub fn check_password(password: &SecretString) -> ScoreResult {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return ScoreResult {
            tier: StrengthTier::VeryWeak,
            score: 0,
            feedback: vec!["Password cannot be empty".to_string()],
            is_strong: false,
        };
    }

    let score = length_score(password) + variety_score(password) + pattern_penalty(password);
    let tier = StrengthTier::from_score(score);

    ScoreResult {
        tier,
        score,
        feedback: build_feedback(password, tier),
        is_strong: tier.is_strong(),
    }
}

/// Assembles the ordered feedback list.
///
/// Re-runs the section checks on the password rather than reusing the
/// sub-scores, so run messages appear even when the penalty short-circuited
/// on the common set.
fn build_feedback(password: &SecretString, tier: StrengthTier) -> Vec<String> {
    let mut feedback = Vec::new();

    feedback.push(length_feedback(password));
    feedback.extend(variety_feedback(password));
    feedback.extend(pattern_feedback(password));

    let remark = match tier {
        StrengthTier::VeryWeak | StrengthTier::Weak => {
            "Password is too weak. Consider using a password manager."
        }
        StrengthTier::Fair => "Password is acceptable but could be stronger.",
        StrengthTier::Good | StrengthTier::Strong | StrengthTier::VeryStrong => {
            "Great! This is a strong password."
        }
    };
    feedback.push(remark.to_string());

    feedback
}

/// Async version that sends the check result via channel.
///
/// An already-cancelled token skips the check entirely and nothing is sent,
/// so stale keystrokes can be dropped by interactive callers. No debouncing
/// is applied here; pacing is the caller's concern.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("password check cancelled before evaluation");
        return;
    }

    let result = check_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
    }
}
