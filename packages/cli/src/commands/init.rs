use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_editor::templates::landing_page;
use pagesmith_editor::{DocumentStore, Editor, JsonFileStore};
use pagesmith_model::Node;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Start from an empty page instead of the landing template
    #[arg(long)]
    pub blank: bool,

    /// Saved document path
    #[arg(short, long, default_value = "page.json")]
    pub document: String,

    /// Force overwrite existing config and document
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagesmith project...".bright_blue().bold()
    );

    let config = Config {
        document_path: args.document.clone(),
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Starter document
    let document_path = config.document_path(cwd);
    if document_path.exists() && !args.force {
        println!("  {} Kept existing {}", "•".dimmed(), args.document);
    } else {
        let root = if args.blank { Node::root() } else { landing_page() };
        let editor = Editor::from_root(root, config.editor.clone())?;
        JsonFileStore::new(&document_path).save(&editor.to_persisted())?;
        println!("  {} Created {}", "✓".green(), args.document);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagesmith blocks");
    println!("  2. Run: pagesmith apply edits.json");
    println!("  3. Run: pagesmith export");

    Ok(())
}
