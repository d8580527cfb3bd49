pub mod check;
pub mod deal;
pub mod play;
pub mod rules;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use tr_core::QuestionPool;
use tr_session::{GameConfig, ThemeKind};

/// Session settings shared by `play` and `rules`.
#[derive(Args, Debug)]
pub struct GameOptions {
    /// Theme: wizard or fighter
    #[arg(short, long)]
    theme: Option<String>,

    /// RNG seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Questions per run (default: the whole pool)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seconds allowed per question
    #[arg(long)]
    time_limit: Option<u32>,

    /// Streak points that restore the fifty lifeline
    #[arg(long)]
    fifty_threshold: Option<u32>,

    /// Streak points that restore the call lifeline
    #[arg(long)]
    call_threshold: Option<u32>,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GameOptions {
    /// Build the session config: file first, then flag overrides.
    pub fn to_config(&self) -> Result<GameConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(name) = &self.theme {
            let theme = ThemeKind::parse(name)
                .ok_or_else(|| format!("unknown theme '{name}' (expected wizard or fighter)"))?;
            config = config.with_theme(theme);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(n) = self.count {
            config = config.with_run_length(n);
        }
        if let Some(secs) = self.time_limit {
            config = config.with_time_limit(secs);
        }
        if let Some(points) = self.fifty_threshold {
            config = config.with_fifty_threshold(points);
        }
        if let Some(points) = self.call_threshold {
            config = config.with_call_threshold(points);
        }

        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<GameConfig, String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&source).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

/// Load a question pool, turning errors into CLI messages.
fn load_pool(path: &Path) -> Result<Arc<QuestionPool>, String> {
    let pool = QuestionPool::load(path).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), questions = pool.len(), "loaded pool");
    Ok(Arc::new(pool))
}
