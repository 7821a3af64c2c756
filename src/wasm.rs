//! WASM bindings for the tagcloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::layout::{CircularCloudLayouter, PointI, SizeI};
use crate::output::{layout_sizes, parse_options, ErrorInfo, LayoutOutput, PlacementOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// A cloud that JavaScript grows one rectangle at a time.
#[wasm_bindgen]
pub struct CloudLayout {
    inner: CircularCloudLayouter,
}

#[wasm_bindgen]
impl CloudLayout {
    #[wasm_bindgen(constructor)]
    pub fn new(center_x: i32, center_y: i32) -> CloudLayout {
        CloudLayout { inner: CircularCloudLayouter::new(PointI { x: center_x, y: center_y }) }
    }

    /// Build a cloud from a JSON options object (any subset of the layout options).
    pub fn with_options(center_x: i32, center_y: i32, options_json: &str) -> Result<CloudLayout, JsValue> {
        let center = PointI { x: center_x, y: center_y };
        parse_options(options_json)
            .and_then(|cfg| CircularCloudLayouter::with_config(center, cfg))
            .map(|inner| CloudLayout { inner })
            .map_err(|e| {
                console_error(&format!("Error creating cloud layout: {}", e));
                JsValue::from_str(&e.to_string())
            })
    }

    /// Place the next rectangle; returns a JSON `PlacementOutput`.
    pub fn place_next(&mut self, width: i32, height: i32) -> String {
        let out = match self.inner.place_next(SizeI { w: width, h: height }) {
            Ok(rect) => PlacementOutput {
                rect: Some(rect),
                circumradius: self.inner.circumradius(),
                error: None,
            },
            Err(e) => {
                console_error(&format!("Error placing rectangle: {}", e));
                PlacementOutput {
                    rect: None,
                    circumradius: self.inner.circumradius(),
                    error: Some(ErrorInfo::from(&e)),
                }
            }
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    /// The whole layout as a JSON `LayoutOutput`.
    pub fn layout_json(&self) -> String {
        serde_json::to_string(&LayoutOutput::from_layouter(&self.inner)).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn circumradius(&self) -> f64 {
        self.inner.circumradius()
    }

    pub fn center_x(&self) -> i32 {
        self.inner.center().x
    }

    pub fn center_y(&self) -> i32 {
        self.inner.center().y
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Lay out a JSON array of sizes around a center in one call.
/// Returns a JSON `LayoutOutput`; failures are reported in its `error` field.
#[wasm_bindgen]
pub fn layout_rectangles(center_x: i32, center_y: i32, sizes_json: &str, options_json: &str) -> String {
    let out = layout_sizes(PointI { x: center_x, y: center_y }, sizes_json, options_json);
    if let Some(err) = &out.error {
        console_error(&format!("Error laying out rectangles: {}", err.message));
    }
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}
