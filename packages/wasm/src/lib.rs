use pagesmith_compiler_html::{compile_to_html, ExportArtifact, ExportOptions};
use pagesmith_editor::templates::landing_page;
use pagesmith_editor::{
    resolve_index, Command, Editor, EditorConfig, MemoryStore, NodeId, PersistedState, Rect,
    PALETTE,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Browsers have no process id, and a reloaded page must not mint ids that
/// collide with the saved document.
#[cfg(target_arch = "wasm32")]
fn seed_browser_session() {
    let entropy = format!("{}:{}", js_sys::Date::now(), js_sys::Math::random());
    pagesmith_model::seed_session(&entropy);
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_browser_session() {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DispatchOutcome {
    version: u64,
    created: Option<NodeId>,
}

#[derive(Serialize)]
struct PaletteEntry {
    label: &'static str,
    kind: &'static str,
    section: &'static str,
}

#[wasm_bindgen]
pub struct ExportResult {
    file_name: String,
    contents: String,
}

#[wasm_bindgen]
impl ExportResult {
    #[wasm_bindgen(getter, js_name = fileName)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn contents(&self) -> String {
        self.contents.clone()
    }

    #[wasm_bindgen(getter, js_name = mimeType)]
    pub fn mime_type(&self) -> String {
        ExportArtifact::MIME_TYPE.to_string()
    }
}

/// Editor session owned by the browser page
#[wasm_bindgen]
pub struct WasmEditor {
    editor: Editor,
    store: MemoryStore,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Resume from a saved state JSON, or start from the landing template
    /// when there is none (or it cannot be read)
    #[wasm_bindgen(constructor)]
    pub fn new(saved: Option<String>) -> WasmEditor {
        seed_browser_session();

        let store = MemoryStore::new();
        let config = EditorConfig::default();

        let restored = saved.and_then(|json| {
            PersistedState::from_json(&json)
                .map_err(|e| e.to_string())
                .and_then(|persisted| {
                    Editor::from_persisted(persisted, config.clone()).map_err(|e| e.to_string())
                })
                .map_err(|e| warn!(error = %e, "Discarding unreadable saved state"))
                .ok()
        });

        let editor = match restored {
            Some(editor) => editor,
            None => match Editor::from_root(landing_page(), config.clone()) {
                Ok(editor) => editor,
                Err(_) => Editor::with_config(config),
            },
        };

        WasmEditor {
            editor: editor.with_store(store.clone()),
            store,
        }
    }

    /// Run one JSON command; returns `{version, created}` as JSON
    pub fn dispatch(&mut self, command: &str) -> Result<String, JsValue> {
        self.dispatch_json(command).map_err(|e| JsValue::from_str(&e))
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo().is_ok()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo().is_ok()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.editor.history().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.editor.history().can_redo()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u64 {
        self.editor.version()
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.editor.selected_id().map(|id| id.to_string())
    }

    /// Current tree as JSON
    #[wasm_bindgen(js_name = rootJson)]
    pub fn root_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.editor.root()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Last persisted session JSON, for the page to put in local storage
    #[wasm_bindgen(js_name = savedState)]
    pub fn saved_state(&self) -> Option<String> {
        self.store.contents()
    }

    /// Child index for a drop at `pointer_y`, given the children's
    /// `[y, height]` pairs flattened in display order
    #[wasm_bindgen(js_name = resolveIndex)]
    pub fn resolve_index(pointer_y: f64, bounds: Vec<f64>) -> Result<usize, JsValue> {
        Self::index_from_bounds(pointer_y, &bounds).map_err(|e| JsValue::from_str(&e))
    }

    /// Add a palette component at the pointer. `layout` maps node ids to
    /// `{x, y, width, height}`.
    #[wasm_bindgen(js_name = dropComponent)]
    pub fn drop_component(
        &mut self,
        kind: &str,
        target_id: &str,
        pointer_y: f64,
        layout: &str,
    ) -> Result<String, JsValue> {
        self.drop_json(kind, target_id, pointer_y, layout)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Palette entries as JSON
    pub fn palette() -> String {
        let entries: Vec<PaletteEntry> = PALETTE
            .iter()
            .map(|item| PaletteEntry {
                label: item.label,
                kind: item.kind,
                section: item.section.title(),
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self, file_name: Option<String>) -> Result<ExportResult, JsValue> {
        self.export(file_name).map_err(|e| JsValue::from_str(&e))
    }
}

impl WasmEditor {
    fn index_from_bounds(pointer_y: f64, bounds: &[f64]) -> Result<usize, String> {
        if bounds.len() % 2 != 0 {
            return Err(format!(
                "Expected [y, height] pairs, got {} values",
                bounds.len()
            ));
        }

        let rects: Vec<Rect> = bounds
            .chunks_exact(2)
            .map(|pair| Rect::new(0.0, pair[0], 0.0, pair[1]))
            .collect();
        Ok(resolve_index(pointer_y, &rects))
    }

    fn dispatch_json(&mut self, json: &str) -> Result<String, String> {
        let command: Command = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let result = self.editor.dispatch(command).map_err(|e| e.to_string())?;
        Self::outcome(result.version, result.created)
    }

    fn drop_json(&mut self, kind: &str, target_id: &str, pointer_y: f64, layout: &str) -> Result<String, String> {
        let layout: HashMap<NodeId, Rect> = serde_json::from_str(layout).map_err(|e| e.to_string())?;
        let result = self
            .editor
            .drop_component(kind, target_id, pointer_y, &layout)
            .map_err(|e| e.to_string())?;
        Self::outcome(result.version, result.created)
    }

    fn export(&self, file_name: Option<String>) -> Result<ExportResult, String> {
        let mut options = ExportOptions::default();
        if let Some(name) = file_name {
            options.file_name = name;
        }

        let artifact = compile_to_html(self.editor.root(), &options).map_err(|e| e.to_string())?;
        Ok(ExportResult {
            file_name: artifact.file_name,
            contents: artifact.contents,
        })
    }

    fn outcome(version: u64, created: Option<NodeId>) -> Result<String, String> {
        serde_json::to_string(&DispatchOutcome { version, created }).map_err(|e| e.to_string())
    }
}
