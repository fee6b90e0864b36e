//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and
//! reports its score contribution plus any feedback it triggered.

mod common;
mod entropy;
mod length;
mod pattern;
mod sequence;
mod variety;

pub use common::common_password_section;
pub use entropy::entropy_section;
pub use length::length_section;
pub use pattern::repeated_pattern_section;
pub use sequence::sequential_digit_section;
pub use variety::character_class_section;

/// Score contribution and feedback produced by one evaluation section.
///
/// Feedback entries keep the order in which the section emitted them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Signed contribution to the running score.
    pub score: i32,
    /// Feedback entries triggered by this section.
    pub feedback: Vec<String>,
}
