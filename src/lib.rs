//! Rule-based password strength scoring
//!
//! Scores a password with a pipeline of independent checks — length tiers,
//! character-class coverage, common-password lookup, sequential digits,
//! repeated patterns and a pool-based entropy estimate — then classifies
//! the total as weak, medium or strong. Every triggered rule contributes
//! one human-readable feedback entry, in a fixed evaluation order.
//!
//! # Features
//!
//! - `async` (default): Enables async result delivery over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path returned by [`default_wordlist_path`]
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_score::{evaluate_strength, CommonPasswordSet, default_wordlist_path};
//! use secrecy::SecretString;
//!
//! // Load the word list once at startup; a missing file is an empty list
//! let common = CommonPasswordSet::load(default_wordlist_path())
//!     .expect("Failed to read word list");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_strength(&password, &common);
//!
//! println!("Strength: {}", evaluation.strength());
//! println!("Score: {} / {}", evaluation.score, pwd_score::NOMINAL_MAX_SCORE);
//! for issue in &evaluation.feedback {
//!     println!("- {issue}");
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;
mod wordlist;

// Public API
pub use evaluator::evaluate_strength;
pub use types::{Evaluation, Strength, NOMINAL_MAX_SCORE};
pub use wordlist::{default_wordlist_path, CommonPasswordSet, WordlistError};

#[cfg(feature = "async")]
pub use evaluator::evaluate_strength_tx;
