//! This crate provides WebAssembly bindings for hexboard. The [HexBoard]
//! struct is the main interface; you'll have to initialize a single instance
//! of [HexBoard] in order to do any hexboard operations from JS. From there,
//! [HexBoard] provides functions for creating and validating render configs,
//! then building a [Renderer] from that config to lay out tiles and roads.
//!
//! You probably won't ever want to include this crate in another Rust project.
//! Instead, use `wasm-pack` to build this into an npm package, then import that
//! into your JS project.

mod util;

use crate::util::{to_js, RenderConfigHelper, ResultExt};
use hexboard::{BoardRenderer, Point2, RenderConfig, TileDirection, TilePoint};
use wasm_bindgen::{prelude::*, JsCast};

/// A top-level interface for interacting with hexboard from Wasm.
#[wasm_bindgen]
pub struct HexBoard;

#[wasm_bindgen]
impl HexBoard {
    /// Initialize global state needed for rendering. Should be called once
    /// per app instance.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        wasm_logger::init(wasm_logger::Config::default());
        Self
    }

    /// Get the default render config as a JS object.
    pub fn default_render_config(
        &self,
    ) -> Result<RenderConfigObject, JsValue> {
        RenderConfigHelper::new().default()
    }

    /// Verify that the given JS object is a valid render config. Return the
    /// validated config, with all defaults populated, if it's valid. Return
    /// an error if it isn't.
    pub fn validate_render_config(
        &self,
        input: RenderConfigObject,
    ) -> Result<RenderConfigObject, JsValue> {
        RenderConfigHelper::new().validate(input)
    }

    /// Create a renderer from a JS render config object. The input should be
    /// an **object**, not a JSON string. Missing fields get their defaults.
    /// Will return an error if the config can't be deserialized or is
    /// invalid.
    pub fn build_renderer(
        &self,
        input: RenderConfigObject,
    ) -> Result<Renderer, JsValue> {
        let render_config: RenderConfig =
            RenderConfigHelper::new().deserialize(input)?;
        let renderer = BoardRenderer::new(render_config).into_js()?;
        Ok(Renderer(renderer))
    }
}

/// JS handle to a [BoardRenderer]. Every method is pure, so a component can
/// call these on each re-render.
#[wasm_bindgen]
pub struct Renderer(BoardRenderer);

#[wasm_bindgen]
impl Renderer {
    /// Pixel position `[x, y]` of the center of tile `(q, r)`. Coordinates
    /// are floats because that's what JS has; non-integral values are
    /// rejected rather than rounded.
    pub fn tile_to_pixel(
        &self,
        q: f64,
        r: f64,
        size: f64,
        center_x: f64,
        center_y: f64,
    ) -> Result<Vec<f64>, JsValue> {
        let tile = TilePoint::from_f64(q, r).into_js()?;
        let pos = self
            .0
            .tile_to_pixel(tile, size, Point2::new(center_x, center_y))
            .into_js()?;
        Ok(vec![pos.x, pos.y])
    }

    /// Thickness of a road strip for the given viewport width
    pub fn stroke_width(&self, viewport_width: f64) -> Result<f64, JsValue> {
        self.0.stroke_width(viewport_width).into_js()
    }

    /// Placement of a road strip along one side of a tile, relative to the
    /// tile center. `direction` is a name like `"NE"` or `"northeast"`.
    pub fn edge_transform(
        &self,
        direction: &str,
        size: f64,
        viewport_width: f64,
    ) -> Result<EdgeTransformObject, JsValue> {
        let direction: TileDirection = direction.parse().into_js()?;
        let transform = self
            .0
            .edge_transform(direction, size, viewport_width)
            .into_js()?;
        Ok(to_js(&transform)?.unchecked_into())
    }

    /// Inline style values for the road strip on one side of tile `(q, r)`
    #[allow(clippy::too_many_arguments)]
    pub fn edge_style(
        &self,
        q: f64,
        r: f64,
        direction: &str,
        size: f64,
        center_x: f64,
        center_y: f64,
        viewport_width: f64,
    ) -> Result<EdgeStyleObject, JsValue> {
        let tile = TilePoint::from_f64(q, r).into_js()?;
        let direction: TileDirection = direction.parse().into_js()?;
        let style = self
            .0
            .edge_style(
                tile,
                direction,
                size,
                Point2::new(center_x, center_y),
                viewport_width,
            )
            .into_js()?;
        Ok(to_js(&style)?.unchecked_into())
    }
}

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"

/**
 * See description in the `extern "C"` section below
 */
export interface RenderConfigObject {
    small_breakpoint?: number;
    small_stroke?: number;
    large_stroke?: number;
}

export interface EdgeTransformObject {
    translation: { x: number; y: number };
    rotation: number;
    length: number;
    thickness: number;
}

export interface EdgeStyleObject {
    left: number;
    top: number;
    width: number;
    height: number;
    transform: string;
}
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of the [RenderConfig] type from the core crate. This
    /// represents what **can be deserialized into a [RenderConfig]**.
    ///
    /// **It is very important that this stays up to date with the
    /// [RenderConfig] type**.
    #[wasm_bindgen(typescript_type = "RenderConfigObject")]
    pub type RenderConfigObject;

    /// Serialized [hexboard::EdgeTransform]
    #[wasm_bindgen(typescript_type = "EdgeTransformObject")]
    pub type EdgeTransformObject;

    /// Serialized [hexboard::EdgeStyle]
    #[wasm_bindgen(typescript_type = "EdgeStyleObject")]
    pub type EdgeStyleObject;
}
