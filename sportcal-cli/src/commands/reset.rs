use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use sportcal_core::{EventStore, Storage};

pub fn run<S: Storage>(store: &mut EventStore<S>, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Reset all events to the original data? Events you added will be removed")
            .default(false)
            .interact()?;

    if !confirmed {
        println!("{}", "  Nothing changed".dimmed());
        return Ok(());
    }

    let count = store.reset().len();
    println!("{}", format!("  Reset to {} events", count).green());

    Ok(())
}
