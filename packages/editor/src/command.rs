//! Wire-level command envelope.
//!
//! The UI speaks one JSON object per command, tagged by `type`:
//!
//! ```json
//! {"type": "addComponent", "kind": "card", "targetId": "root"}
//! {"type": "selectComponent", "nodeId": "n1a2b3c4d-7"}
//! {"type": "undo"}
//! ```
//!
//! Tree mutations are [`Mutation`]s; everything else (selection and history
//! control) is a [`Control`] and never lands in history.

use crate::Mutation;
use pagesmith_model::NodeId;
use serde::{Deserialize, Serialize};

/// Commands that do not change the tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Control {
    SelectComponent {
        #[serde(default)]
        node_id: Option<NodeId>,
    },
    Undo,
    Redo,
    ClearHistory,
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Control::SelectComponent { .. } => "selectComponent",
            Control::Undo => "undo",
            Control::Redo => "redo",
            Control::ClearHistory => "clearHistory",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Command {
    Mutate(Mutation),
    Control(Control),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Mutate(mutation) => mutation.name(),
            Command::Control(control) => control.name(),
        }
    }

    /// Parse a single command or a JSON array of commands
    pub fn parse_script(json: &str) -> Result<Vec<Command>, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Script {
            Many(Vec<Command>),
            One(Command),
        }

        Ok(match serde_json::from_str(json)? {
            Script::Many(commands) => commands,
            Script::One(command) => vec![command],
        })
    }
}

impl From<Mutation> for Command {
    fn from(mutation: Mutation) -> Self {
        Command::Mutate(mutation)
    }
}

impl From<Control> for Command {
    fn from(control: Control) -> Self {
        Command::Control(control)
    }
}
