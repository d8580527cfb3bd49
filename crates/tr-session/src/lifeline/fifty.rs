//! Option reduction.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{SessionError, SessionResult};

/// Keep the answer and one random wrong option, in random order.
///
/// Needs at least three options; with two there is nothing to remove.
pub fn reduce_options(
    options: &[String],
    answer: &str,
    rng: &mut StdRng,
) -> SessionResult<Vec<String>> {
    if options.len() < 3 {
        return Err(SessionError::NotEnoughOptions);
    }

    let wrong: Vec<&String> = options.iter().filter(|o| *o != answer).collect();
    let decoy = wrong.choose(rng).ok_or(SessionError::NotEnoughOptions)?;

    let mut reduced = vec![answer.to_string(), (*decoy).clone()];
    reduced.shuffle(rng);
    Ok(reduced)
}
