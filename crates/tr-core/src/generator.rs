//! Run generation: turning an unordered pool into a balanced play order.
//!
//! The run is assembled in blocks of [`BLOCK_SIZE`]. Each block first tries
//! to take one question from every tier (easy, medium, hard, expert), falling
//! back to lower tiers when a tier has run dry, then fills up with random
//! picks from whatever is left and is shuffled before being appended. Any
//! shortfall after the full blocks is covered by a shuffle of the leftovers.

use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::pool::QuestionPool;
use crate::question::{Difficulty, Question};

/// Number of positions in one block.
pub const BLOCK_SIZE: usize = 10;

/// Produces a fresh run from a shared pool each time a game starts.
#[derive(Debug, Clone)]
pub struct RunGenerator {
    pool: Arc<QuestionPool>,
}

impl RunGenerator {
    /// Create a generator over the given pool.
    pub fn new(pool: Arc<QuestionPool>) -> Self {
        Self { pool }
    }

    /// The pool this generator draws from.
    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    /// Generate a run of `min(n, |pool|)` questions; `None` means the whole pool.
    pub fn generate(&self, n: Option<usize>, rng: &mut StdRng) -> RunSequence {
        let n = n.unwrap_or(self.pool.len());
        let order = deal(&self.pool, n, rng);
        RunSequence {
            pool: Arc::clone(&self.pool),
            order,
        }
    }
}

/// An ordered selection of pool questions for one session.
#[derive(Debug, Clone)]
pub struct RunSequence {
    pool: Arc<QuestionPool>,
    order: Vec<usize>,
}

impl RunSequence {
    /// Number of questions in the run.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the run is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The question at a run position.
    pub fn get(&self, position: usize) -> Option<&Question> {
        self.order.get(position).and_then(|&i| self.pool.get(i))
    }

    /// Pool indices in run order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Iterate over the questions in run order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.order.iter().filter_map(|&i| self.pool.get(i))
    }
}

/// Remaining pool indices, one bucket per tier.
struct Buckets {
    tiers: [Vec<usize>; 4],
}

impl Buckets {
    fn from_pool(pool: &QuestionPool) -> Self {
        let mut tiers: [Vec<usize>; 4] = Default::default();
        for (i, q) in pool.iter().enumerate() {
            tiers[q.difficulty.index()].push(i);
        }
        Self { tiers }
    }

    fn remaining(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }

    /// Draw from `tier`, or failing that from each lower tier in turn.
    fn draw_with_fallback(&mut self, tier: Difficulty, rng: &mut StdRng) -> Option<usize> {
        for t in (0..=tier.index()).rev() {
            let bucket = &mut self.tiers[t];
            if !bucket.is_empty() {
                let pick = rng.random_range(0..bucket.len());
                return Some(bucket.swap_remove(pick));
            }
        }
        None
    }

    /// Draw uniformly across every remaining question.
    fn draw_any(&mut self, rng: &mut StdRng) -> Option<usize> {
        let total = self.remaining();
        if total == 0 {
            return None;
        }
        let mut pick = rng.random_range(0..total);
        for bucket in &mut self.tiers {
            if pick < bucket.len() {
                return Some(bucket.swap_remove(pick));
            }
            pick -= bucket.len();
        }
        None
    }

    fn into_remaining(self) -> Vec<usize> {
        self.tiers.into_iter().flatten().collect()
    }
}

/// Deal up to `n` pool indices in balanced block order.
///
/// Never returns an index twice and never more than the pool holds.
pub fn deal(pool: &QuestionPool, n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut buckets = Buckets::from_pool(pool);
    let mut run = Vec::with_capacity(n.min(pool.len()));

    for block_no in 0..n / BLOCK_SIZE {
        if buckets.is_empty() {
            break;
        }

        let mut block = Vec::with_capacity(BLOCK_SIZE);
        for tier in Difficulty::ALL {
            if let Some(i) = buckets.draw_with_fallback(tier, rng) {
                block.push(i);
            }
        }
        while block.len() < BLOCK_SIZE {
            match buckets.draw_any(rng) {
                Some(i) => block.push(i),
                None => break,
            }
        }

        block.shuffle(rng);
        tracing::debug!(block = block_no, size = block.len(), "dealt block");
        run.extend(block);
    }

    let short = n.saturating_sub(run.len());
    if short > 0 {
        let mut leftover = buckets.into_remaining();
        leftover.shuffle(rng);
        leftover.truncate(short);
        run.extend(leftover);
    }

    run
}
