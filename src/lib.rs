//! Circular tag cloud layout.
//!
//! Rectangles are placed one by one around a fixed center: an outward spiral
//! finds a first free spot, then compaction pulls the rectangle back toward
//! the center. Placement is greedy and append-only.

pub mod error;
pub mod layout;
pub mod output;
pub mod tags;
mod wasm;

pub use error::{LayoutError, Result};
pub use layout::{CircularCloudLayouter, LayoutConfig, PointI, RectI, SizeI};
pub use tags::{layout_tags, FontSizeMapper, SizeProvider, TagPlacement};
pub use wasm::{layout_rectangles, CloudLayout};
