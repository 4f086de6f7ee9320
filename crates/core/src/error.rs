use thiserror::Error;

/// A numeric input to one of the geometry functions was outside of its
/// domain. All geometry inputs are plain numbers at the JS boundary, so this
/// is how we catch `NaN`s and friends before they turn into a garbled board.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("{field} must be finite, but was {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, but was {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, but was {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be an integer, but was {value}")]
    NonIntegral { field: &'static str, value: f64 },

    #[error(
        "Invalid cube coordinate ({q}, {r}, {s}); must be on the plane q+r+s=0"
    )]
    OffPlane { q: i32, r: i32, s: i32 },

    #[error(
        "Tile ({q}, {r}) is out of range; q, r and s must all be within \
         ±{max}",
        max = i32::MAX
    )]
    OutOfRange { q: i64, r: i64 },
}

/// A string didn't name any of the six tile directions. This is always an
/// integration bug on the caller's side, so it should never be swallowed or
/// replaced with a default direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid tile direction {0:?}; expected one of NE, E, SE, SW, W, NW")]
pub struct InvalidDirectionError(pub String);

/// Make sure a value is not `NaN` or infinite
pub(crate) fn check_finite(
    field: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}

/// Make sure a value is finite and strictly greater than zero
pub(crate) fn check_positive(
    field: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    let value = check_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { field, value })
    }
}

/// Make sure a value is finite and zero or greater
pub(crate) fn check_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, GeometryError> {
    let value = check_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::Negative { field, value })
    }
}
