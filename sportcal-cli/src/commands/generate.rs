use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sportcal_core::generate::generate_events;

pub fn run(out: &Path, year: i32, seed: Option<u64>) -> Result<()> {
    let output = match seed {
        Some(seed) => generate_events(&mut StdRng::seed_from_u64(seed), year),
        None => generate_events(&mut rand::rng(), year),
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(out, json).with_context(|| format!("Could not write {}", out.display()))?;

    println!("{}", format!("  Generated {} seed records", output.count).green());
    println!("  Saved to {}", out.display());
    println!(
        "{}",
        format!("  Spread across October, November and December {}", year).dimmed()
    );
    println!(
        "{}",
        format!(
            "  Use it with: sportcal config --seed-file {} && sportcal reset",
            out.display()
        )
        .dimmed()
    );

    Ok(())
}
