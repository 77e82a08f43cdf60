use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hydrate::{Hydrate, str_field};

/// A single step of a command recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandItem {
    /// Human-readable description of what the step does
    #[serde(default)]
    pub desc: String,
    /// The literal command text
    #[serde(default)]
    pub cmd: String,
}

impl Hydrate for CommandItem {
    fn from_raw(raw: &Value) -> Self {
        CommandItem {
            desc: str_field(raw, "desc"),
            cmd: str_field(raw, "cmd"),
        }
    }
}
