use super::open_editor;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_editor::Command;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file with one command or an array of commands ("-" for stdin)
    pub script: PathBuf,

    /// Run the commands without saving the result
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first rejected command
    #[arg(long)]
    pub strict: bool,
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;

    let script = if args.script.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(cwd.join(&args.script))?
    };
    let commands = Command::parse_script(&script)?;

    let mut editor = open_editor(&config, cwd, !args.dry_run)?;

    let mut applied = 0;
    let mut rejected = 0;

    for (i, command) in commands.into_iter().enumerate() {
        let name = command.name();
        match editor.dispatch(command) {
            Ok(result) => {
                debug!(index = i, command = name, version = result.version, "Applied script command");
                applied += 1;
                match result.created {
                    Some(id) => println!("  {} {} → {}", "✓".green(), name, id.as_str().dimmed()),
                    None => println!("  {} {}", "✓".green(), name),
                }
            }
            Err(e) => {
                debug!(index = i, command = name, kind = ?e.kind(), "Script command rejected");
                rejected += 1;
                eprintln!("  {} {} - {}", "✗".red(), name, e.to_string().red());
                if args.strict {
                    return Err(anyhow!("Command #{} ({}) was rejected", i + 1, name));
                }
            }
        }
    }

    println!();
    if rejected == 0 {
        println!("{} Applied {} commands", "✅".green(), applied);
    } else {
        println!(
            "{} Applied {} commands, {} rejected",
            "⚠️".yellow(),
            applied,
            rejected
        );
    }

    if args.dry_run {
        println!("{}", "(dry run, nothing saved)".dimmed());
    }

    Ok(())
}
