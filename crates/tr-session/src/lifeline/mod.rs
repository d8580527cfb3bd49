//! The two lifelines: option reduction and the oracle call.

pub mod call;
pub mod fifty;

pub use call::{CallOutcome, PendingCall};
pub use fifty::reduce_options;

use serde::{Deserialize, Serialize};

/// A single-use player aid, restorable through a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifeline {
    /// Remove all but one wrong option.
    Fifty,
    /// Ask a persona for the answer.
    Call,
}

impl std::fmt::Display for Lifeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifty => write!(f, "fifty"),
            Self::Call => write!(f, "call"),
        }
    }
}
