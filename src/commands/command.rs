use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::item::CommandItem;
use crate::hydrate::{Hydrate, convert_values, str_field};

/// A named recipe: an ordered sequence of steps
///
/// The step order is significant; it is the order steps are displayed in
/// and meant to be carried out in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub command: Vec<CommandItem>,
}

impl Hydrate for Command {
    fn from_raw(raw: &Value) -> Self {
        let command = raw
            .get("command")
            .map(|steps| convert_values::<CommandItem>(steps, false).into_vec())
            .unwrap_or_default();
        Command {
            name: str_field(raw, "name"),
            command,
        }
    }
}
