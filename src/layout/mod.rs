// Circular cloud layouter.
//
// Places rectangles of caller-supplied sizes around a fixed center so that
// none overlap, keeping the enclosing circle small.
//
// Goals:
// - Deterministic: same sizes + same config => same layout
// - Append-only: a placed rectangle never moves again
// - No overlap under one inclusive edge policy, everywhere
//
// Submodules:
// - intersection: overlap tests against the placed set
// - spatial_grid: optional hash grid behind the placed set
// - circumcircle: running max distance from center to any corner
// - spiral: outward spiral search for a first free position
// - compaction: inward search + greedy axis tightening
// - cloud: the layouter facade tying it all together

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{LayoutError, Result};

mod circumcircle;
mod cloud;
mod compaction;
mod intersection;
mod spatial_grid;
mod spiral;

pub use circumcircle::{corner_radius, CircumcircleTracker};
pub use cloud::CircularCloudLayouter;
pub use compaction::{compact, seek_better_place, tighten_cloud_region};
pub use intersection::{intersects_any, PlacedSet};
pub use spiral::{find_place, SpiralPlacement};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    pub fn at(pos: PointI, size: SizeI) -> Self {
        Self { x: pos.x, y: pos.y, w: size.w, h: size.h }
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn right(&self) -> i32 { self.x + self.w }
    pub fn top(&self) -> i32 { self.y }
    pub fn bottom(&self) -> i32 { self.y + self.h }

    pub fn size(&self) -> SizeI {
        SizeI { w: self.w, h: self.h }
    }

    /// Integer center, rounded toward the top-left.
    pub fn center(&self) -> PointI {
        PointI { x: self.x + self.w / 2, y: self.y + self.h / 2 }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    pub fn translate(&self, dx: i32, dy: i32) -> RectI {
        RectI { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [PointI; 4] {
        [
            PointI { x: self.left(), y: self.top() },
            PointI { x: self.right(), y: self.top() },
            PointI { x: self.left(), y: self.bottom() },
            PointI { x: self.right(), y: self.bottom() },
        ]
    }

    /// Closed-region overlap test. Rectangles that only touch along an edge
    /// or a corner count as intersecting, so placed rectangles always keep
    /// at least one unit between them.
    pub fn intersects(&self, other: &RectI) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    pub fn union(&self, other: &RectI) -> RectI {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectI { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pull each new rectangle toward the center after the spiral found it.
    pub compact: bool,
    /// Run the inward spiral search before tightening. Ignored unless `compact`.
    pub seek_better_place: bool,
    /// Angle added per step of the outward spiral (radians).
    pub spiral_angle_step: f64,
    /// Spiral radius per radian of accumulated angle.
    pub spiral_step: f64,
    /// Angle added per step of the inward search (radians).
    pub seek_angle_step: f64,
    /// Number of samples the inward search takes on its way to the center.
    pub seek_steps: u32,
    /// Give up with `PlacementTimeout` after this many spiral steps.
    pub max_spiral_iterations: Option<u32>,
    /// Cell size of the spatial hash behind overlap checks. `None` scans linearly.
    pub index_cell_size: Option<i32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact: true,
            seek_better_place: true,
            spiral_angle_step: PI / 25.0,
            spiral_step: 1.0,
            seek_angle_step: PI / 10.0,
            seek_steps: 40,
            max_spiral_iterations: Some(1_000_000),
            index_cell_size: None,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        positive("spiral_angle_step", self.spiral_angle_step)?;
        positive("spiral_step", self.spiral_step)?;
        positive("seek_angle_step", self.seek_angle_step)?;
        if self.seek_steps == 0 {
            return Err(LayoutError::InvalidConfig {
                option: "seek_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(cell) = self.index_cell_size {
            if cell <= 0 {
                return Err(LayoutError::InvalidConfig {
                    option: "index_cell_size",
                    reason: format!("must be positive, got {}", cell),
                });
            }
        }
        Ok(())
    }
}

fn positive(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig {
            option,
            reason: format!("must be a positive finite number, got {}", value),
        })
    }
}
