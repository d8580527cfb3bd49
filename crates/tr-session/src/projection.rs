//! What a front end needs to draw after each event.

use serde::Serialize;

use tr_core::Difficulty;

use crate::state::Phase;

/// Which controls are usable right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// Start a game from the lobby.
    pub start: bool,
    /// Submit an answer.
    pub submit: bool,
    /// Move on to the next question.
    pub next: bool,
    /// Play again after the game ended.
    pub restart: bool,
    /// Use the fifty lifeline.
    pub fifty: bool,
    /// Use the call lifeline.
    pub call: bool,
}

impl Controls {
    /// Derive control availability from the phase and lifeline flags.
    pub fn for_phase(phase: Phase, fifty_used: bool, call_used: bool) -> Self {
        let awaiting = phase == Phase::AwaitingAnswer;
        Self {
            start: phase == Phase::Lobby,
            submit: awaiting,
            next: phase == Phase::Correct,
            restart: matches!(phase, Phase::GameOver(_)),
            fifty: awaiting && !fifty_used,
            call: awaiting && !call_used,
        }
    }
}

/// A renderable snapshot of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderProjection {
    /// Controller phase.
    pub phase: Phase,
    /// Question heading, lobby title, or the game-over line.
    pub heading: String,
    /// 1-based number of the question on screen; 0 when there is none.
    pub question_number: usize,
    /// Questions in the current run.
    pub total_questions: usize,
    /// The choices currently on offer.
    pub options: Vec<String>,
    /// Tier of the question on screen.
    pub difficulty: Option<Difficulty>,
    /// Total points.
    pub score: u32,
    /// `Score: N`.
    pub score_text: String,
    /// Streak status line.
    pub streak_text: String,
    /// Clock line.
    pub timer_text: String,
    /// Result or warning line for the last event.
    pub feedback: Option<String>,
    /// The call lifeline's hint line.
    pub hint: Option<String>,
    /// Control availability.
    pub controls: Controls,
}
