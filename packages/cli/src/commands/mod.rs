pub mod apply;
pub mod blocks;
pub mod export;
pub mod init;
pub mod tree;

pub use apply::{apply, ApplyArgs};
pub use blocks::{blocks, BlocksArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use tree::{tree, TreeArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use pagesmith_editor::{DocumentStore, Editor, JsonFileStore};
use std::path::Path;

/// Open the project's saved document. With `persist`, every command applied
/// to the returned editor is written back to disk.
pub(crate) fn open_editor(config: &Config, cwd: &Path, persist: bool) -> Result<Editor> {
    let path = config.document_path(cwd);
    if !path.exists() {
        return Err(anyhow!(
            "No document at {}. Run `pagesmith init` first",
            path.display()
        ));
    }

    let store = JsonFileStore::new(&path);
    let editor = if persist {
        Editor::open(store, config.editor.clone())?
    } else {
        let persisted = store
            .load()?
            .ok_or_else(|| anyhow!("Document {} is empty", path.display()))?;
        Editor::from_persisted(persisted, config.editor.clone())?
    };

    Ok(editor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_apply_export_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();

        init(
            InitArgs {
                blank: false,
                document: "page.json".into(),
                force: false,
            },
            cwd,
        )
        .unwrap();
        assert!(cwd.join("pagesmith.config.json").exists());

        fs::write(
            cwd.join("edits.json"),
            r#"[
                {"type": "updateContent", "nodeId": "hero-title", "content": "Ship <faster>"},
                {"type": "deleteComponent", "nodeId": "footer-section"},
                {"type": "deleteComponent", "nodeId": "root"}
            ]"#,
        )
        .unwrap();
        apply(
            ApplyArgs {
                script: "edits.json".into(),
                dry_run: false,
                strict: false,
            },
            cwd,
        )
        .unwrap();

        export(
            ExportArgs {
                stdout: false,
                out_dir: None,
                file_name: None,
                title: Some("Launch".into()),
            },
            cwd,
        )
        .unwrap();

        let html = fs::read_to_string(cwd.join("dist/page.html")).unwrap();
        assert!(html.contains("<title>Launch</title>"));
        assert!(html.contains("Ship &lt;faster&gt;"));
        assert!(!html.contains("All rights reserved"));
    }

    #[test]
    fn test_strict_apply_stops_on_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        init(
            InitArgs {
                blank: true,
                document: "page.json".into(),
                force: false,
            },
            cwd,
        )
        .unwrap();

        fs::write(
            cwd.join("edits.json"),
            r#"{"type": "moveComponent", "nodeId": "ghost", "targetId": "root"}"#,
        )
        .unwrap();
        let result = apply(
            ApplyArgs {
                script: "edits.json".into(),
                dry_run: false,
                strict: true,
            },
            cwd,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_leaves_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path();
        init(
            InitArgs {
                blank: true,
                document: "page.json".into(),
                force: false,
            },
            cwd,
        )
        .unwrap();
        let before = fs::read_to_string(cwd.join("page.json")).unwrap();

        fs::write(
            cwd.join("edits.json"),
            r#"[{"type": "addComponent", "kind": "hero", "targetId": "root"}]"#,
        )
        .unwrap();
        apply(
            ApplyArgs {
                script: "edits.json".into(),
                dry_run: true,
                strict: true,
            },
            cwd,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(cwd.join("page.json")).unwrap(), before);
    }

    #[test]
    fn test_commands_require_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let result = tree(TreeArgs { json: false }, dir.path());
        assert!(result.is_err());
    }
}
