#![forbid(unsafe_code)]

//! Headless snail (spiral) circle packing.
//!
//! Every item becomes a circle whose area equals the item's value. Circles are packed in input
//! order into a tangent, non-overlapping spiral around a moving central circle. The result is the
//! positioned circles plus the bounding box of the layout; rendering is left to the caller.

pub mod bounds;
pub mod config;
pub mod direction;
pub mod error;
pub mod geom;
pub mod input;
pub mod intersect;
pub mod normalize;
pub mod packer;
pub mod radius;
pub mod value;

pub use bounds::Dimensions;
pub use config::SnailOptions;
pub use direction::StartPosition;
pub use error::{Error, GeometryFailure, Result};
pub use geom::{Circle, Point, TOLERANCE};
pub use input::InputData;
pub use packer::{Packer, PackerState, PlacedNode};
pub use radius::{diameter_for_value, radius_for_value};
pub use value::{FieldSelector, ValueSelector};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Positioned circles in input order plus the layout extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout<T> {
    pub data_to_plot: Vec<PlacedNode<T>>,
    pub dimensions: Dimensions,
}

impl<T> Layout<T> {
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.data_to_plot.iter().map(|n| &n.circle)
    }
}

/// Lays out JSON items, reading each item's value from `options.value_field`.
pub fn generate(data: &InputData, options: &SnailOptions) -> Result<Layout<Value>> {
    let selector = FieldSelector::new(options.value_field.as_str());
    generate_with(data, options, &selector)
}

/// Lays out JSON items with a caller-supplied value selector.
pub fn generate_with(
    data: &InputData,
    options: &SnailOptions,
    selector: &dyn ValueSelector<Value>,
) -> Result<Layout<Value>> {
    layout(data.to_items()?, options, selector)
}

/// Lays out arbitrary items.
///
/// Values are validated before any circle is placed, so a bad value is reported even when the
/// geometry would have failed on an earlier item.
pub fn layout<T>(
    items: impl IntoIterator<Item = T>,
    options: &SnailOptions,
    selector: &(impl ValueSelector<T> + ?Sized),
) -> Result<Layout<T>> {
    let mut sized = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let value = value::checked_value(selector, &item, index)?;
        sized.push((item, radius_for_value(value)));
    }

    tracing::debug!(
        items = sized.len(),
        start = %options.start_position,
        clockwise = options.clockwise,
        "packing snail layout"
    );

    let mut packer = Packer::from_options(options);
    for (item, r) in sized {
        packer.step(item, r)?;
    }
    let mut nodes = packer.into_nodes();

    if options.positive_coordinates {
        normalize::move_to_positive_coordinates(nodes.iter_mut().map(|n| &mut n.circle));
    }

    let dimensions = Dimensions::from_circles(nodes.iter().map(|n| &n.circle));
    Ok(Layout {
        data_to_plot: nodes,
        dimensions,
    })
}
