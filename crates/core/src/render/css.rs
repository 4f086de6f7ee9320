//! Formatting for HTML/CSS render targets. The browser board draws each road
//! slot as an absolutely positioned `<div>` whose top-left corner sits on the
//! tile center, then moves it into place with a CSS `transform`.

use crate::render::{transform::EdgeTransform, unit::Point2};
use serde::{Deserialize, Serialize};

/// Inline style values for one road strip element. All lengths are pixels.
///
/// The element is expected to use the default `transform-origin` (its own
/// center), so the rotation spins it in place after the translation has
/// moved its center onto the side midpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// `left`, the x coordinate of the tile center
    pub left: f64,
    /// `top`, the y coordinate of the tile center
    pub top: f64,
    /// `width`, the strip length
    pub width: f64,
    /// `height`, the strip thickness
    pub height: f64,
    /// `transform`, see [css_transform]
    pub transform: String,
}

impl EdgeStyle {
    /// Build the style for a strip on the tile whose center is at `anchor`
    pub fn new(anchor: Point2, transform: &EdgeTransform) -> Self {
        Self {
            left: anchor.x,
            top: anchor.y,
            width: transform.length,
            height: transform.thickness,
            transform: css_transform(transform),
        }
    }

    /// Render as a CSS declaration block body, e.g. for a `style` attribute
    pub fn to_inline(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px; transform: {};",
            self.left, self.top, self.width, self.height, self.transform
        )
    }
}

/// Format a transform as a CSS `transform` value. The translation is to the
/// top-left of the unrotated box ([EdgeTransform::box_origin]) because CSS
/// positions elements by their corner.
pub fn css_transform(transform: &EdgeTransform) -> String {
    let origin = transform.box_origin();
    format!(
        "translate({}px, {}px) rotate({}deg)",
        origin.x, origin.y, transform.rotation.0
    )
}
