//! Element references as they appear on the wire.

use serde::{Deserialize, Serialize};

/// The W3C web element identifier. Every element reference on the wire is an
/// object with exactly this key.
pub const ELEMENT_IDENTIFIER: &str = "element-6066-11e4-a52e-4f735466cecf";

/// An opaque reference to a DOM element, valid only within its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRef {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub element_id: String,
}

impl ElementRef {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}
