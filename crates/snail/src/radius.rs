//! Area-preserving value to radius conversion.

/// `1 / sqrt(pi)`: radius of a circle with unit area.
pub const UNIT_AREA_RADIUS: f64 = 0.564_189_583_547_756_3;

/// Radius of the circle whose area equals `value`.
///
/// Callers validate `value` first (see [`crate::value`]); negative or non-finite input yields NaN.
pub fn radius_for_value(value: f64) -> f64 {
    UNIT_AREA_RADIUS * value.sqrt()
}

/// Diameter of the circle whose area equals `value`.
pub fn diameter_for_value(value: f64) -> f64 {
    2.0 * radius_for_value(value)
}
