use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Structural problems found when checking a tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Root node must have id \"root\" and type root, found {id} ({node_type})")]
    InvalidRoot { id: String, node_type: String },

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

impl ModelError {
    pub fn invalid_root(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self::InvalidRoot {
            id: id.into(),
            node_type: node_type.into(),
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}
