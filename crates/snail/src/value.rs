//! Reading the numeric value (circle area) out of an item.

use crate::error::{Error, Result};
use serde_json::Value;

/// Strategy that extracts an item's value.
///
/// Returning `None` means the item carries no usable number; [`checked_value`] turns that and any
/// negative or non-finite number into an error tagged with the item index.
pub trait ValueSelector<T: ?Sized> {
    fn select(&self, item: &T) -> Option<f64>;

    /// Name used in error messages.
    fn describe(&self) -> &str {
        "value selector"
    }
}

impl<T: ?Sized, F> ValueSelector<T> for F
where
    F: Fn(&T) -> Option<f64>,
{
    fn select(&self, item: &T) -> Option<f64> {
        self(item)
    }
}

/// Reads a numeric field from a JSON object item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    field: String,
}

impl FieldSelector {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_VALUE_FIELD)
    }
}

impl ValueSelector<Value> for FieldSelector {
    fn select(&self, item: &Value) -> Option<f64> {
        item.get(&self.field)?.as_f64()
    }

    fn describe(&self) -> &str {
        &self.field
    }
}

pub fn checked_value<T: ?Sized>(
    selector: &(impl ValueSelector<T> + ?Sized),
    item: &T,
    index: usize,
) -> Result<f64> {
    let Some(value) = selector.select(item) else {
        return Err(Error::MissingValue {
            index,
            field: selector.describe().to_string(),
        });
    };
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidValue { index, value });
    }
    Ok(value)
}
