//! Error types for the editor

use pagesmith_model::ModelError;
use thiserror::Error;

/// Why a mutation was rejected. The tree is untouched whenever one of these
/// is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("Node {0} cannot contain children")]
    NotAContainer(String),

    #[error("Moving {node_id} into {target_id} would create a cycle")]
    CycleDetected { node_id: String, target_id: String },

    #[error("The root node cannot be moved, deleted or duplicated")]
    RootImmutable,

    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] ModelError),
}

/// Failures of a persistence backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Coarse classification callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidTarget,
    HistoryExhausted,
    Storage,
    Malformed,
}

impl MutationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MutationError::NodeNotFound(_) | MutationError::TargetNotFound(_) => ErrorKind::NotFound,
            MutationError::NotAContainer(_)
            | MutationError::CycleDetected { .. }
            | MutationError::RootImmutable => ErrorKind::InvalidTarget,
            MutationError::MalformedDocument(_) => ErrorKind::Malformed,
        }
    }
}

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::Mutation(e) => e.kind(),
            EditorError::NothingToUndo | EditorError::NothingToRedo => ErrorKind::HistoryExhausted,
            EditorError::Storage(_) => ErrorKind::Storage,
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
