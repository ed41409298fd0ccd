use pagesmith_compiler_html::ExportOptions;
use pagesmith_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagesmith.config.json";

/// Pagesmith project file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Saved editor session (tree, selection, history)
    #[serde(default = "default_document_path")]
    pub document_path: String,

    /// Where exports are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub export: ExportOptions,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_document_path() -> String {
    "page.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn document_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.document_path)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
            out_dir: default_out_dir(),
            export: ExportOptions::default(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "documentPath": "site/home.json",
            "outDir": "public",
            "export": { "fileName": "index.html", "breakpoint": 640 },
            "editor": { "historyCapacity": 10 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.document_path, "site/home.json");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.export.file_name, "index.html");
        assert_eq!(config.export.breakpoint, 640);
        assert_eq!(config.export.title, "Exported Page");
        assert_eq!(config.editor.history_capacity, 10);
        assert!(config.editor.persist_history);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document_path, "page.json");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.export.file_name, "page.html");
        assert_eq!(config.editor.history_capacity, 50);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }
}
