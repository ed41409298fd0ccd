#![cfg(target_arch = "wasm32")]

use pagesmith_wasm::WasmEditor;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn dispatch_then_undo() {
    let mut editor = WasmEditor::new(None);
    editor
        .dispatch(r#"{"type":"addComponent","kind":"button","targetId":"cta-section"}"#)
        .unwrap();
    assert!(editor.can_undo());
    assert!(editor.undo());
    assert!(editor.can_redo());
    assert_eq!(editor.version(), 2);
}

#[wasm_bindgen_test]
fn rejected_command_is_a_js_error() {
    let mut editor = WasmEditor::new(None);
    assert!(editor.dispatch(r#"{"type":"undo"}"#).is_err());
}

#[wasm_bindgen_test]
fn export_contains_document() {
    let editor = WasmEditor::new(None);
    let html = editor.export_html(None).unwrap().contents();
    assert!(html.starts_with("<!doctype html>"));
}

#[wasm_bindgen_test]
fn add_and_duplicate_mint_distinct_ids() {
    let mut editor = WasmEditor::new(None);
    let added = editor
        .dispatch(r#"{"type":"addComponent","kind":"card","targetId":"root"}"#)
        .unwrap();
    let copied = editor
        .dispatch(r#"{"type":"duplicateComponent","nodeId":"hero-section"}"#)
        .unwrap();
    assert!(added.contains(r#""created":"n"#));
    assert!(copied.contains(r#""created":"n"#));
    assert_ne!(added, copied);
}

#[wasm_bindgen_test]
fn unpaired_bounds_are_rejected() {
    assert!(WasmEditor::resolve_index(10.0, vec![0.0, 40.0, 40.0]).is_err());
}
