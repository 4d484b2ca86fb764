//! Where the spiral starts and which way it turns.

use crate::geom::{Circle, Point, Vector};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side of the first circle on which the second circle is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    Top,
    Left,
    Bottom,
    #[default]
    Right,
}

impl StartPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }

    /// Offset of the second circle's center from the first one's, for circles of radius
    /// `first_r` and `second_r` touching on this side.
    pub fn second_offset(self, first_r: f64, second_r: f64) -> Vector {
        let d = first_r + second_r;
        match self {
            Self::Top => euclid::vec2(0.0, d),
            Self::Left => euclid::vec2(-d, 0.0),
            Self::Bottom => euclid::vec2(0.0, -d),
            Self::Right => euclid::vec2(d, 0.0),
        }
    }

    /// Whether `candidate` lies in the open quadrant (relative to the second circle's center)
    /// that makes the spiral turn in the requested direction.
    pub fn accepts_third(self, clockwise: bool, second: &Circle, candidate: Point) -> bool {
        let dx = candidate.x - second.x;
        let dy = candidate.y - second.y;
        match (self, clockwise) {
            (Self::Top, true) => dx > 0.0 && dy < 0.0,
            (Self::Top, false) => dx < 0.0 && dy < 0.0,
            (Self::Left, true) => dx > 0.0 && dy > 0.0,
            (Self::Left, false) => dx > 0.0 && dy < 0.0,
            (Self::Bottom, true) => dx < 0.0 && dy > 0.0,
            (Self::Bottom, false) => dx > 0.0 && dy > 0.0,
            (Self::Right, true) => dx < 0.0 && dy < 0.0,
            (Self::Right, false) => dx < 0.0 && dy > 0.0,
        }
    }
}

impl std::fmt::Display for StartPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "left" => Ok(Self::Left),
            "bottom" => Ok(Self::Bottom),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}
