use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Extra information attached to an instruction, like a warning about the road
/// ahead. Carried along, never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Annotation")]
pub struct InstructionAnnotation {
    #[serde(default)]
    pub importance: i32,
    #[serde(default)]
    pub message: String,
}

impl InstructionAnnotation {
    pub fn new(importance: i32, message: impl Into<String>) -> Self {
        InstructionAnnotation {
            importance,
            message: message.into(),
        }
    }

    pub fn empty() -> Self {
        InstructionAnnotation::default()
    }

    pub fn is_empty(&self) -> bool {
        self.importance == 0 && self.message.is_empty()
    }
}
