use anyhow::Result;
use owo_colors::OwoColorize;
use sportcal_core::{EventStore, Storage};

use crate::render::render_detail;

pub fn run<S: Storage>(store: &EventStore<S>, id: &str) -> Result<()> {
    match store.get_by_id(id) {
        Some(event) => println!("{}", render_detail(event)),
        None => println!("{}", format!("Event not found: {}", id).red()),
    }
    Ok(())
}
