//! The mutable record of one play-through.
//!
//! `SessionState` holds the scoring and streak rules; the session drives it
//! and owns the run and the presented choices.

use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A wrong option was submitted.
    Incorrect,
    /// The countdown reached zero.
    TimedOut,
    /// Every question in the run was answered.
    Exhausted,
}

/// Where the round controller currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created but not started.
    Lobby,
    /// A question is on screen and the clock is running.
    AwaitingAnswer,
    /// The current question was answered correctly; waiting to advance.
    Correct,
    /// Terminal until restarted.
    GameOver(EndReason),
}

/// Which lifelines a correct answer restored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restored {
    /// The fifty lifeline came back.
    pub fifty: bool,
    /// The call lifeline came back.
    pub call: bool,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The clock was not running; nothing changed.
    Ignored,
    /// One second elapsed; this many remain.
    Counting(u32),
    /// The clock ran out on this tick.
    Expired,
}

/// Scores, streak, lifeline flags, and the per-question clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current controller phase.
    pub phase: Phase,
    /// Bumped whenever a new question is presented.
    pub round: u64,
    /// Position in the run.
    pub current_index: usize,
    /// Total points.
    pub score: u32,
    /// Points earned since the streak started.
    pub streak_score: u32,
    /// Whether a streak is running.
    pub streak_active: bool,
    /// The fifty lifeline is spent.
    pub fifty_used: bool,
    /// The call lifeline is spent.
    pub call_used: bool,
    /// The current question is resolved.
    pub answered: bool,
    /// Seconds left on the clock.
    pub time_remaining: u32,
    /// Whether the clock is counting down.
    pub timer_running: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh state in the lobby.
    pub fn new() -> Self {
        Self {
            phase: Phase::Lobby,
            round: 0,
            current_index: 0,
            score: 0,
            streak_score: 0,
            streak_active: false,
            fifty_used: false,
            call_used: false,
            answered: false,
            time_remaining: 0,
            timer_running: false,
        }
    }

    /// Zero every game field and present the first question.
    ///
    /// The round counter keeps counting so results from the previous game
    /// can still be told apart.
    pub fn reset(&mut self, time_limit: u32) {
        self.score = 0;
        self.streak_score = 0;
        self.streak_active = false;
        self.fifty_used = false;
        self.call_used = false;
        self.present(0, time_limit);
    }

    /// Present the question at `index` with a full clock.
    pub fn present(&mut self, index: usize, time_limit: u32) {
        self.phase = Phase::AwaitingAnswer;
        self.round += 1;
        self.current_index = index;
        self.answered = false;
        self.time_remaining = time_limit;
        self.timer_running = true;
    }

    /// End the game; the index goes back to the start.
    pub fn finish(&mut self, reason: EndReason) {
        self.phase = Phase::GameOver(reason);
        self.timer_running = false;
        if reason == EndReason::Exhausted {
            self.current_index = 0;
            self.answered = false;
        }
    }

    /// Both lifelines are spent.
    pub fn both_lifelines_used(&self) -> bool {
        self.fifty_used && self.call_used
    }

    /// Apply a correct answer worth `points`.
    ///
    /// A streak only starts once both lifelines are spent, and it stops as
    /// soon as neither is spent any more.
    pub fn record_correct(
        &mut self,
        points: u32,
        fifty_threshold: u32,
        call_threshold: u32,
    ) -> Restored {
        self.score += points;

        if self.streak_active {
            self.streak_score += points;
        } else if self.both_lifelines_used() {
            self.streak_active = true;
            self.streak_score = 0;
        }

        let mut restored = Restored::default();
        if self.fifty_used && self.streak_score >= fifty_threshold {
            self.fifty_used = false;
            restored.fifty = true;
        }
        if self.call_used && self.streak_score >= call_threshold {
            self.call_used = false;
            restored.call = true;
        }

        if !self.fifty_used && !self.call_used {
            self.end_streak();
        }

        self.resolve();
        self.phase = Phase::Correct;
        restored
    }

    /// Apply a wrong answer.
    pub fn record_incorrect(&mut self) {
        self.end_streak();
        self.resolve();
        self.finish(EndReason::Incorrect);
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.timer_running || self.answered {
            return Tick::Ignored;
        }
        if self.time_remaining > 1 {
            self.time_remaining -= 1;
            return Tick::Counting(self.time_remaining);
        }

        self.time_remaining = 0;
        self.end_streak();
        self.resolve();
        self.finish(EndReason::TimedOut);
        Tick::Expired
    }

    /// Break a running streak. Returns whether one was running.
    pub fn break_streak(&mut self) -> bool {
        let was_active = self.streak_active;
        self.end_streak();
        was_active
    }

    /// Short streak status line.
    pub fn streak_text(&self) -> String {
        format!(
            "Streak: {} | {}",
            self.streak_score,
            if self.streak_active {
                "Streak Active"
            } else {
                "Streak Inactive"
            }
        )
    }

    fn end_streak(&mut self) {
        self.streak_active = false;
        self.streak_score = 0;
    }

    fn resolve(&mut self) {
        self.answered = true;
        self.timer_running = false;
    }
}
