//! Error types for the session engine.

use thiserror::Error;

use crate::lifeline::Lifeline;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by session transitions.
///
/// All of them are recoverable: the session is left unchanged and the front
/// end only needs to show the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No option was chosen, the option is not on offer, or the round is
    /// already resolved.
    #[error("please pick an option")]
    InvalidSelection,

    /// The lifeline has already been spent.
    #[error("{0} lifeline already used")]
    LifelineUnavailable(Lifeline),

    /// The fifty lifeline needs at least three options to remove one.
    #[error("not enough options")]
    NotEnoughOptions,

    /// The action needs an unanswered question.
    #[error("this question has already been answered")]
    RoundResolved,

    /// The action needs a correctly answered question.
    #[error("answer the current question first")]
    RoundUnresolved,

    /// The game has ended; only a restart is accepted.
    #[error("the game is over, restart to play again")]
    GameOver,

    /// The game has not been started yet.
    #[error("the game has not started")]
    NotStarted,

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    Config(String),
}
