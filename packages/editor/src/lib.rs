//! # Pagesmith Editor
//!
//! Editing engine for Pagesmith page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node tree, ids, navigation           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session state + commands            │
//! │  - Component factory and starter templates  │
//! │  - Validated, atomic mutations              │
//! │  - Snapshot undo/redo history               │
//! │  - Drop position resolution                 │
//! │  - Best-effort persistence                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: tree → standalone HTML       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **One owner**: the [`Editor`] holds the only live state
//! 2. **All or nothing**: a rejected command leaves the tree untouched
//! 3. **Whole-state undo**: history stores full snapshots of tree + selection
//! 4. **Persistence never blocks editing**: save failures are only logged
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_editor::{Editor, Command};
//!
//! let mut editor = Editor::new();
//!
//! let card = editor.add_component("card", "root", None)?.created;
//! editor.update_style(card.unwrap(), "padding", 24)?;
//!
//! let command: Command = serde_json::from_str(r#"{"type":"undo"}"#)?;
//! editor.dispatch(command)?;
//! ```

mod command;
mod config;
mod editor;
mod errors;
pub mod factory;
mod history;
mod mutations;
pub mod resolver;
mod state;
mod storage;
pub mod templates;

pub use command::{Command, Control};
pub use config::EditorConfig;
pub use editor::Editor;
pub use errors::{EditorError, EditorResult, ErrorKind, MutationError, StorageError};
pub use factory::{create, PaletteItem, PaletteSection, Template, PALETTE};
pub use history::{History, DEFAULT_CAPACITY};
pub use mutations::{Mutation, MutationResult};
pub use resolver::{resolve_drop, resolve_index, DropTarget, LayoutSource, Rect};
pub use state::EditorState;
pub use storage::{DocumentStore, JsonFileStore, MemoryStore, PersistedState};

// Re-export common types for convenience
pub use pagesmith_model::{Node, NodeId, NodeType, StyleValue};
