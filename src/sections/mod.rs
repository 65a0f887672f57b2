//! Password scoring sections
//!
//! Each section computes one independent contribution to the total score,
//! plus the feedback messages for the same checks.

mod length;
mod pattern;
mod variety;

pub use length::{length_feedback, length_score};
pub use pattern::{pattern_feedback, pattern_penalty};
pub use variety::{variety_feedback, variety_score};
