use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_editor::{PaletteSection, PALETTE};

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Only list one section (basic, media, form, layout, blocks)
    #[arg(short, long)]
    pub section: Option<String>,
}

const SECTIONS: [PaletteSection; 5] = [
    PaletteSection::Basic,
    PaletteSection::Media,
    PaletteSection::Form,
    PaletteSection::Layout,
    PaletteSection::Blocks,
];

pub fn blocks(args: BlocksArgs) -> Result<()> {
    let filter = args.section.map(|s| s.to_ascii_lowercase());

    for section in SECTIONS {
        let key = format!("{:?}", section).to_ascii_lowercase();
        if filter.as_deref().is_some_and(|f| f != key) {
            continue;
        }

        println!("{}", section.title().bright_blue().bold());
        for item in PALETTE.iter().filter(|item| item.section == section) {
            println!("  {:<20} {}", item.label, item.kind.dimmed());
        }
        println!();
    }

    Ok(())
}
