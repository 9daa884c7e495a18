//! List command implementation

use anyhow::Result;
use std::path::Path;

use nikki_tracker::Level;

/// Print every level with its checked state and rewards
pub async fn list_command(config_path: &Path, pending_only: bool) -> Result<()> {
    let (config, tracker) = super::load_tracker(config_path).await?;

    println!("Mira Level Rewards ({} source):\n", config.source.kind);

    let mut shown = 0;
    for level in tracker.levels() {
        let done = tracker.is_completed(&level.key);
        if pending_only && done {
            continue;
        }
        println!("  {}", format_level(level, done));
        shown += 1;
    }

    if shown == 0 {
        println!("  No levels to show.");
    }

    println!("\n{}", tracker.progress());

    Ok(())
}

/// One line per level: checkbox, number, name, title, rewards, requirement
pub(crate) fn format_level(level: &Level, done: bool) -> String {
    let mut line = format!(
        "[{}] {:>3}. {}",
        if done { "x" } else { " " },
        level.id,
        level.level
    );

    if let Some(title) = &level.title {
        line.push_str(&format!(" - {}", title));
    }

    let rewards: Vec<String> = level
        .rewards
        .granted()
        .map(|(kind, value)| format!("{} {}", kind.glyph(), value))
        .collect();
    if !rewards.is_empty() {
        line.push_str(&format!("  {}", rewards.join("  ")));
    }

    if let Some(required) = level.required {
        line.push_str(&format!("  (Required: {})", required));
    }

    line
}
