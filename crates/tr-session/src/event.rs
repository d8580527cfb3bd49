//! Player and clock events accepted by [`TriviaSession::dispatch`].
//!
//! [`TriviaSession::dispatch`]: crate::TriviaSession::dispatch

use serde::{Deserialize, Serialize};

/// One external event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Start a game from the lobby.
    Start,
    /// Submit a choice; `None` means nothing was selected.
    Submit(Option<String>),
    /// Use the fifty lifeline.
    Fifty,
    /// Use the call lifeline.
    Call,
    /// Move on after a correct answer.
    Advance,
    /// One second elapsed.
    Tick,
    /// Throw away the current game and deal a new one.
    Restart,
}

impl Event {
    /// Turn a line of player input into an event.
    ///
    /// Numbers pick from `choices` (1-based); any other text that is not a
    /// command is submitted as-is, matched case-insensitively against the
    /// choices.
    pub fn from_input(input: &str, choices: &[String]) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "start" => return Self::Start,
            "restart" | "again" => return Self::Restart,
            "next" | "n" => return Self::Advance,
            "fifty" | "50" | "50:50" | "50/50" => return Self::Fifty,
            "call" | "c" => return Self::Call,
            "" | "submit" => return Self::Submit(None),
            _ => {}
        }

        if let Ok(n) = trimmed.parse::<usize>()
            && let Some(choice) = n.checked_sub(1).and_then(|i| choices.get(i))
        {
            return Self::Submit(Some(choice.clone()));
        }

        let choice = choices
            .iter()
            .find(|c| c.eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| trimmed.to_string());
        Self::Submit(Some(choice))
    }
}
