//! The call lifeline's oracle: an external voice that restates the answer.
//!
//! The session only knows the [`Oracle`] trait. Front ends inject whatever
//! implementation they like (a text-generation service, a canned script, a
//! test stub); [`PersonaOracle`] is the bundled offline one.

pub mod persona;

pub use persona::PersonaOracle;

use thiserror::Error;

/// What the oracle is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleRequest {
    /// The persona who should deliver the line.
    pub persona: String,
    /// The question text.
    pub question: String,
    /// The full option list of the question.
    pub options: Vec<String>,
    /// The correct option.
    pub answer: String,
}

/// Why the oracle could not produce a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The oracle could not be reached.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle was reached but gave no usable answer.
    #[error("oracle failed: {0}")]
    Failed(String),
}

/// A source of persona-flavored hints.
///
/// Implementations may block; callers run them off the event loop.
pub trait Oracle: Send + Sync {
    /// Produce a short line restating `request.answer`.
    fn consult(&self, request: &OracleRequest) -> Result<String, OracleError>;
}

impl<F> Oracle for F
where
    F: Fn(&OracleRequest) -> Result<String, OracleError> + Send + Sync,
{
    fn consult(&self, request: &OracleRequest) -> Result<String, OracleError> {
        self(request)
    }
}
