//! Placing words instead of bare sizes.
//!
//! Text measurement and frequency-to-font mapping belong to the host (a
//! browser canvas, a font rasterizer, ...). This module only defines the
//! seams and drives the layouter with whatever the host plugs in.

use serde::Serialize;

use crate::error::Result;
use crate::layout::{CircularCloudLayouter, RectI, SizeI};

/// Measures the bounding box of `text` rendered at `font_size`.
pub trait SizeProvider {
    fn measure(&self, text: &str, font_size: f32) -> SizeI;
}

/// Maps how often a word occurs to the font size it is drawn with.
pub trait FontSizeMapper {
    fn font_size(&self, frequency: u32) -> f32;
}

/// A word's final spot in the cloud, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPlacement {
    pub text: String,
    pub frequency: u32,
    pub font_size: f32,
    pub bounds: RectI,
}

/// Place `(text, frequency)` pairs in the order given.
///
/// Stops at the first failure; tags placed before it stay in the layouter.
pub fn layout_tags<'a, I>(
    layouter: &mut CircularCloudLayouter,
    tags: I,
    fonts: &dyn FontSizeMapper,
    sizes: &dyn SizeProvider,
) -> Result<Vec<TagPlacement>>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut out = Vec::new();
    for (text, frequency) in tags {
        let font_size = fonts.font_size(frequency);
        let bounds = layouter.place_next(sizes.measure(text, font_size))?;
        out.push(TagPlacement {
            text: text.to_string(),
            frequency,
            font_size,
            bounds,
        });
    }
    Ok(out)
}
