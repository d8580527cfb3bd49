//! Session engine for Trivia Run.
//!
//! Drives one play-through of a dealt run: answer checking, tier scoring,
//! the per-question countdown, the fifty and call lifelines, and
//! streak-based lifeline restoration. Front ends feed it [`Event`]s and
//! draw the [`RenderProjection`] it returns.

pub mod config;
pub mod error;
pub mod event;
pub mod lifeline;
pub mod oracle;
pub mod projection;
pub mod session;
pub mod state;
pub mod theme;

pub use config::{DEFAULT_TIME_LIMIT, GameConfig};
pub use error::{SessionError, SessionResult};
pub use event::Event;
pub use lifeline::{CallOutcome, Lifeline, PendingCall};
pub use oracle::{Oracle, OracleError, OracleRequest, PersonaOracle};
pub use projection::{Controls, RenderProjection};
pub use session::{TriviaSession, Verdict};
pub use state::{EndReason, Phase, Restored, SessionState, Tick};
pub use theme::{Persona, Theme, ThemeKind};
