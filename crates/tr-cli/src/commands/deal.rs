use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tr_core::{BLOCK_SIZE, Difficulty, RunGenerator};

#[derive(Serialize)]
struct DealtQuestion<'a> {
    position: usize,
    block: usize,
    pool_index: usize,
    difficulty: Difficulty,
    question: &'a str,
}

pub fn run(
    pool_path: &Path,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let pool = super::load_pool(pool_path)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let run = RunGenerator::new(pool).generate(count, &mut rng);

    let dealt: Vec<DealtQuestion<'_>> = run
        .indices()
        .iter()
        .zip(run.iter())
        .enumerate()
        .map(|(pos, (&pool_index, q))| DealtQuestion {
            position: pos + 1,
            block: pos / BLOCK_SIZE + 1,
            pool_index,
            difficulty: q.difficulty,
            question: &q.text,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&dealt).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if dealt.is_empty() {
        println!("  No questions to deal.");
        return Ok(());
    }

    for chunk in dealt.chunks(BLOCK_SIZE) {
        let block = chunk[0].block;
        let label = if chunk.len() == BLOCK_SIZE {
            format!("Block {block}")
        } else {
            format!("Block {block} (partial)")
        };
        println!("  {}", label.bold());
        for d in chunk {
            println!(
                "  {:>3}. {:<7} {}",
                d.position,
                format!("[{}]", d.difficulty),
                d.question
            );
        }
        println!();
    }
    println!("  {} questions dealt", dealt.len());

    Ok(())
}
