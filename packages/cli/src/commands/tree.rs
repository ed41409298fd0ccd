use super::open_editor;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Print the raw document JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

pub fn tree(args: TreeArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let editor = open_editor(&config, cwd, false)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(editor.root())?);
        return Ok(());
    }

    let selected = editor.selected_id();
    for entry in editor.root().outline() {
        let marker = if Some(&entry.id) == selected { "▸" } else { " " };
        println!(
            "{}{}{} {}",
            marker.yellow(),
            "  ".repeat(entry.depth),
            entry.node_type.as_str().bright_white(),
            entry.id.as_str().dimmed()
        );
    }

    Ok(())
}
