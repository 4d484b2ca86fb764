use crate::direction::StartPosition;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VALUE_FIELD: &str = "value";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnailOptions {
    /// Side of the first circle the second circle is attached to.
    pub start_position: StartPosition,
    /// Turn direction of the spiral, decided by where the third circle goes.
    pub clockwise: bool,
    /// Shift the finished layout so no circle extends into negative coordinates.
    pub positive_coordinates: bool,
    /// Item field read by the default value selector.
    pub value_field: String,
}

impl Default for SnailOptions {
    fn default() -> Self {
        Self {
            start_position: StartPosition::default(),
            clockwise: false,
            positive_coordinates: false,
            value_field: DEFAULT_VALUE_FIELD.to_string(),
        }
    }
}

impl SnailOptions {
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_start_position(mut self, start_position: StartPosition) -> Self {
        self.start_position = start_position;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn with_positive_coordinates(mut self, positive_coordinates: bool) -> Self {
        self.positive_coordinates = positive_coordinates;
        self
    }

    pub fn with_value_field(mut self, value_field: impl Into<String>) -> Self {
        self.value_field = value_field.into();
        self
    }
}
