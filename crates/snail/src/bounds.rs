use crate::geom::Circle;
use serde::{Deserialize, Serialize};

/// Extents of a layout. Always contains the origin, so an empty layout is a zero box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Dimensions {
    pub fn from_circles<'a>(circles: impl IntoIterator<Item = &'a Circle>) -> Self {
        circles
            .into_iter()
            .fold(Self::default(), |mut d, c| {
                d.min_x = d.min_x.min(c.x - c.r);
                d.max_x = d.max_x.max(c.x + c.r);
                d.min_y = d.min_y.min(c.y - c.r);
                d.max_y = d.max_y.max(c.y + c.r);
                d
            })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
