//! The question pool: an immutable collection of validated questions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::question::{Difficulty, Question};

/// An immutable collection of questions, shared by the run generator and
/// any number of sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Create a pool from already-validated questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse a pool from a JSON array of question records.
    pub fn from_json(source: &str) -> CoreResult<Self> {
        let pool: Self = serde_json::from_str(source)?;
        tracing::debug!(questions = pool.len(), "parsed question pool");
        Ok(pool)
    }

    /// Read and parse a pool file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Number of questions in the pool.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the pool has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get a question by pool index.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate over all questions in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Count questions per difficulty tier.
    pub fn tier_counts(&self) -> TierCounts {
        let mut counts = TierCounts::default();
        for q in &self.questions {
            counts.0[q.difficulty.index()] += 1;
        }
        counts
    }
}

/// Question counts per difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts([usize; 4]);

impl TierCounts {
    /// Count for one tier.
    pub fn get(&self, tier: Difficulty) -> usize {
        self.0[tier.index()]
    }

    /// Total over all tiers.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Tiers with no questions at all.
    pub fn missing(&self) -> Vec<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .filter(|d| self.get(*d) == 0)
            .collect()
    }
}
