//! Configuration for a trivia session.

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};
use crate::theme::ThemeKind;

/// Seconds per question unless configured otherwise.
pub const DEFAULT_TIME_LIMIT: u32 = 40;

/// Configuration for a session.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Presentation preset.
    pub theme: ThemeKind,
    /// Streak points needed to restore the fifty lifeline; `None` uses the
    /// theme preset.
    pub fifty_threshold: Option<u32>,
    /// Streak points needed to restore the call lifeline; `None` uses the
    /// theme preset.
    pub call_threshold: Option<u32>,
    /// Seconds allowed per question.
    pub time_limit: u32,
    /// Questions per run; `None` plays the whole pool.
    pub run_length: Option<usize>,
    /// RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_theme(ThemeKind::default())
    }
}

impl GameConfig {
    /// Defaults for a theme; thresholds follow the theme preset.
    pub fn for_theme(theme: ThemeKind) -> Self {
        Self {
            theme,
            fifty_threshold: None,
            call_threshold: None,
            time_limit: DEFAULT_TIME_LIMIT,
            run_length: None,
            seed: None,
        }
    }

    /// Effective fifty restoration threshold.
    pub fn fifty_threshold(&self) -> u32 {
        self.fifty_threshold.unwrap_or(self.theme.theme().fifty_threshold)
    }

    /// Effective call restoration threshold.
    pub fn call_threshold(&self) -> u32 {
        self.call_threshold.unwrap_or(self.theme.theme().call_threshold)
    }

    /// Switch theme, keeping any explicit thresholds.
    pub fn with_theme(mut self, theme: ThemeKind) -> Self {
        self.theme = theme;
        self
    }

    /// Set both restoration thresholds (each at least 1).
    pub fn with_thresholds(mut self, fifty: u32, call: u32) -> Self {
        self.fifty_threshold = Some(fifty.max(1));
        self.call_threshold = Some(call.max(1));
        self
    }

    /// Set the fifty restoration threshold (at least 1).
    pub fn with_fifty_threshold(mut self, points: u32) -> Self {
        self.fifty_threshold = Some(points.max(1));
        self
    }

    /// Set the call restoration threshold (at least 1).
    pub fn with_call_threshold(mut self, points: u32) -> Self {
        self.call_threshold = Some(points.max(1));
        self
    }

    /// Set the per-question time limit in seconds (at least 1).
    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit = seconds.max(1);
        self
    }

    /// Limit the number of questions per run.
    pub fn with_run_length(mut self, n: usize) -> Self {
        self.run_length = Some(n);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check values that may have bypassed the builder (e.g. from a file).
    pub fn validate(&self) -> SessionResult<()> {
        if self.fifty_threshold() == 0 || self.call_threshold() == 0 {
            return Err(SessionError::Config(
                "restoration thresholds must be at least 1".to_string(),
            ));
        }
        if self.time_limit == 0 {
            return Err(SessionError::Config(
                "time limit must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}
