use crate::compiler::{escape_html, render_children, CompileOptions, Context};
use crate::CompileError;
use pagesmith_model::Node;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page-level export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Viewport width (px) below which grid and flex layouts collapse to one
    /// column
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u32,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_title() -> String {
    "Exported Page".to_string()
}

fn default_file_name() -> String {
    "page.html".to_string()
}

fn default_breakpoint() -> u32 {
    768
}

fn default_pretty() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            file_name: default_file_name(),
            breakpoint: default_breakpoint(),
            pretty: default_pretty(),
        }
    }
}

/// A finished, self-contained HTML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

impl ExportArtifact {
    pub const MIME_TYPE: &'static str = "text/html";
}

/// Compile a document tree into a standalone HTML page
pub fn compile_to_html(root: &Node, options: &ExportOptions) -> Result<ExportArtifact, CompileError> {
    let file_name = normalize_file_name(&options.file_name)?;
    if options.breakpoint == 0 {
        return Err(CompileError::InvalidBreakpoint(options.breakpoint));
    }

    let mut ctx = Context::new(CompileOptions {
        pretty: options.pretty,
        ..CompileOptions::default()
    });

    ctx.add_line("<!doctype html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    compile_head(options, &mut ctx);
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    render_children(root, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    let contents = ctx.get_output();
    debug!(
        file_name = %file_name,
        nodes = root.subtree_size(),
        bytes = contents.len(),
        "Compiled HTML export"
    );

    Ok(ExportArtifact { file_name, contents })
}

fn compile_head(options: &ExportOptions, ctx: &mut Context) {
    ctx.add_line("<meta charset=\"utf-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line("*{box-sizing:border-box}");
    ctx.add_line("body{margin:0 auto;padding:20px;max-width:1100px;font-family:Inter,Arial,sans-serif}");
    ctx.add_line("img,video,iframe{max-width:100%}");
    ctx.add_line(&format!("@media (max-width:{}px){{", options.breakpoint));
    ctx.indent();
    ctx.add_line("[style*=\"display:grid\"]{grid-template-columns:1fr !important}");
    ctx.add_line("[style*=\"display:flex\"]{flex-direction:column !important}");
    ctx.dedent();
    ctx.add_line("}");
    ctx.dedent();
    ctx.add_line("</style>");
}

/// Bare file name, `.html` appended when no HTML extension is present
fn normalize_file_name(name: &str) -> Result<String, CompileError> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CompileError::InvalidFileName(name.to_string()));
    }

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        Ok(name.to_string())
    } else {
        Ok(format!("{}.html", name))
    }
}
