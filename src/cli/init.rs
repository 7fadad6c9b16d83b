//! Init command - write an example lyar.toml

use crate::config::{CONFIG_FILE, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(CONFIG_FILE).cyan()
    );
    println!("\nNext steps:");
    println!("  {} Analyze a statement", style("lyar analyze statement.txt").cyan());
    println!("  {} Rank a folder", style("lyar batch statements/").cyan());
    Ok(())
}
