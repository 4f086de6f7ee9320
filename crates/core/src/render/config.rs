use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default viewport width (in CSS pixels) below which the board switches to
/// its compact presentation constants. Lines up with the usual "small"
/// breakpoint of common CSS frameworks.
pub const SMALL_BREAKPOINT: f64 = 576.0;
/// Default road strip thickness below [SMALL_BREAKPOINT]
pub const SMALL_STROKE: f64 = 8.0;
/// Default road strip thickness at or above [SMALL_BREAKPOINT]
pub const LARGE_STROKE: f64 = 12.0;

/// Configuration specific to visually rendering a board. These options have
/// absolutely no bearing on board _geometry_: tile centers, edge angles and
/// edge midpoints are the same no matter what's in here. They only control
/// presentation constants that depend on the viewport.
///
/// Every field has a default, so any subset of fields can be given when
/// deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport width (in CSS pixels) at which the board switches from the
    /// compact to the regular presentation. A viewport **narrower** than
    /// this is compact. A viewport exactly this wide is regular.
    #[validate(range(min = 0.0))]
    pub small_breakpoint: f64,

    /// Thickness of a road strip (in pixels) on compact viewports
    #[validate(range(min = 0.1))]
    pub small_stroke: f64,

    /// Thickness of a road strip (in pixels) on regular viewports
    #[validate(range(min = 0.1))]
    pub large_stroke: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            small_breakpoint: SMALL_BREAKPOINT,
            small_stroke: SMALL_STROKE,
            large_stroke: LARGE_STROKE,
        }
    }
}
