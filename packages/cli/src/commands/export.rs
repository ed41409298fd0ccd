use super::open_editor;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_compiler_html::compile_to_html;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// File name of the exported page (overrides config)
    #[arg(short, long)]
    pub file_name: Option<String>,

    /// Page title (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(file_name) = args.file_name {
        config.export.file_name = file_name;
    }
    if let Some(title) = args.title {
        config.export.title = title;
    }

    let editor = open_editor(&config, cwd, false)?;
    let artifact = compile_to_html(editor.root(), &config.export)?;

    if args.stdout {
        print!("{}", artifact.contents);
        return Ok(());
    }

    let out_dir = config.out_dir(cwd);
    fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join(&artifact.file_name);
    fs::write(&output_path, &artifact.contents)?;

    println!(
        "{} Exported {} nodes → {}",
        "✅".green(),
        editor.root().subtree_size() - 1,
        output_path.display()
    );

    Ok(())
}
