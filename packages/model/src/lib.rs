//! # Pagesmith Model
//!
//! The document tree shared by the editor, the HTML compiler and the CLI.
//!
//! A document is a single [`Node`] with id `"root"`. Nodes own their children
//! directly; there are no back-pointers, so "parent of X" is always answered by
//! the navigator walking down from the root.

pub mod error;
pub mod id_generator;
pub mod navigator;
pub mod node;

pub use error::{ModelError, ModelResult};
pub use id_generator::{next_node_id, seed_session, session_seed};
pub use navigator::{validate, Found, OutlineEntry};
pub use node::{Node, NodeId, NodeType, Props, StyleValue, Styles, ROOT_ID};
