use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tr_core::{BLOCK_SIZE, Difficulty};

pub fn run(pool_path: &Path) -> Result<(), String> {
    let pool = super::load_pool(pool_path)?;
    let counts = pool.tier_counts();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tier", "Points", "Questions"]);
    for tier in Difficulty::ALL {
        table.add_row(vec![
            tier.to_string(),
            tier.points().to_string(),
            counts.get(tier).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} questions, {} full block{} of {BLOCK_SIZE}",
        counts.total(),
        counts.total() / BLOCK_SIZE,
        if counts.total() / BLOCK_SIZE == 1 { "" } else { "s" },
    );

    let missing = counts.missing();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        println!(
            "  {} no {} questions; blocks will fall back to easier tiers",
            "warning:".yellow(),
            names.join(", ")
        );
    }

    println!("  All checks passed for '{}'.", pool_path.display());
    Ok(())
}
