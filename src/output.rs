//! Output types for JavaScript consumption.
//!
//! These structs are serialized to JSON and handed to whatever renders the
//! cloud on the other side of the wasm boundary.

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::layout::{CircularCloudLayouter, LayoutConfig, PointI, RectI, SizeI};

/// Snapshot of a whole layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    pub center: PointI,
    pub circumradius: f64,
    /// Covered area over circumcircle area.
    pub coverage: f64,
    pub rects: Vec<RectI>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LayoutOutput {
    pub fn from_layouter(layouter: &CircularCloudLayouter) -> Self {
        Self {
            center: layouter.center(),
            circumradius: layouter.circumradius(),
            coverage: layouter.coverage(),
            rects: layouter.current_layout().to_vec(),
            error: None,
        }
    }

    pub fn failed(layouter: &CircularCloudLayouter, e: &LayoutError) -> Self {
        Self { error: Some(ErrorInfo::from(e)), ..Self::from_layouter(layouter) }
    }
}

/// Result of a single placement.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<RectI>,
    pub circumradius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// "invalid_input", "placement_timeout", ...
    pub kind: String,
    pub message: String,
}

impl From<&LayoutError> for ErrorInfo {
    fn from(e: &LayoutError) -> Self {
        Self { kind: e.kind().to_string(), message: e.to_string() }
    }
}

/// Parse a JSON options object. Empty input means defaults.
pub fn parse_options(options_json: &str) -> Result<LayoutConfig> {
    if options_json.trim().is_empty() {
        return Ok(LayoutConfig::default());
    }
    let cfg: LayoutConfig = serde_json::from_str(options_json)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Lay out a JSON array of `{"w": .., "h": ..}` sizes in one go.
///
/// On failure the output still carries whatever was placed before the
/// failing size, plus the error.
pub fn layout_sizes(center: PointI, sizes_json: &str, options_json: &str) -> LayoutOutput {
    let built = parse_options(options_json)
        .and_then(|cfg| CircularCloudLayouter::with_config(center, cfg));
    let mut layouter = match built {
        Ok(layouter) => layouter,
        Err(e) => return LayoutOutput::failed(&CircularCloudLayouter::new(center), &e),
    };
    let sizes: Vec<SizeI> = match serde_json::from_str(sizes_json) {
        Ok(sizes) => sizes,
        Err(e) => return LayoutOutput::failed(&layouter, &e.into()),
    };
    for size in sizes {
        if let Err(e) = layouter.place_next(size) {
            return LayoutOutput::failed(&layouter, &e);
        }
    }
    LayoutOutput::from_layouter(&layouter)
}
