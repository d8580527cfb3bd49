//! Core types for Trivia Run: questions, difficulty tiers, and run generation.
//!
//! This crate owns the question data model and the algorithm that turns an
//! unordered pool into a balanced play order. It knows nothing about
//! sessions, scoring state, or presentation.

/// Error types used throughout the crate.
pub mod error;
/// Balanced run generation from a question pool.
pub mod generator;
/// The immutable question pool and its loader.
pub mod pool;
/// Question records and difficulty tiers.
pub mod question;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export generator types.
pub use generator::{BLOCK_SIZE, RunGenerator, RunSequence, deal};
/// Re-export pool types.
pub use pool::{QuestionPool, TierCounts};
/// Re-export question types.
pub use question::{Difficulty, Question};
