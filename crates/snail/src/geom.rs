//! Plane geometry shared by the packer and its post-passes.
//!
//! Coordinates use the usual math orientation (y grows upwards); renderers with a downward y axis
//! flip the sign themselves.

use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

/// Slack allowed when comparing distances for tangency and overlap.
pub const TOLERANCE: f64 = 1e-6;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    pub fn at(center: Point, r: f64) -> Self {
        Self::new(center.x, center.y, r)
    }

    pub fn center(&self) -> Point {
        point(self.x, self.y)
    }

    /// The same center with the radius grown by `by`.
    ///
    /// A circle of radius `by` is tangent to `self` exactly when its center lies on the enlarged
    /// circle, which turns "find a tangent position" into "intersect enlarged circles".
    pub fn enlarged(&self, by: f64) -> Self {
        Self::new(self.x, self.y, self.r + by)
    }

    pub fn distance_to(&self, other: &Circle) -> f64 {
        self.center().distance_to(other.center())
    }

    /// Signed clearance between the two outlines; negative when they overlap.
    pub fn gap_to(&self, other: &Circle) -> f64 {
        self.distance_to(other) - (self.r + other.r)
    }

    pub fn is_tangent_to(&self, other: &Circle) -> bool {
        self.gap_to(other).abs() < TOLERANCE
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        self.gap_to(other) < -TOLERANCE
    }

    pub fn translate(&mut self, by: Vector) {
        self.x += by.x;
        self.y += by.y;
    }
}
