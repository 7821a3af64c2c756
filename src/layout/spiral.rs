// Outward spiral search.
//
// Starts with the rectangle centered on the cloud center and walks an
// Archimedean spiral (radius = spiral_step * accumulated angle) until the
// rectangle no longer touches anything placed. The first free position wins,
// however far out it is.

use super::intersection::PlacedSet;
use super::{LayoutConfig, PointI, RectI, SizeI};
use crate::error::{LayoutError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPlacement {
    pub rect: RectI,
    /// Spiral steps taken before the rectangle came free.
    pub iterations: u32,
}

/// Offset `origin` by polar `(radius, angle)`, rounding each coordinate up.
pub(crate) fn polar_offset(origin: PointI, radius: f64, angle: f64) -> PointI {
    PointI {
        x: origin.x + (radius * angle.cos()).ceil() as i32,
        y: origin.y + (radius * angle.sin()).ceil() as i32,
    }
}

pub fn find_place(
    center: PointI,
    size: SizeI,
    placed: &PlacedSet,
    cfg: &LayoutConfig,
) -> Result<SpiralPlacement> {
    let start = PointI { x: center.x - size.w / 2, y: center.y - size.h / 2 };
    let mut rect = RectI::at(start, size);
    let mut angle = 0.0_f64;
    let mut iterations = 0_u32;

    while placed.intersects_any(&rect) {
        if cfg.max_spiral_iterations.is_some_and(|max| iterations >= max) {
            tracing::warn!(
                width = size.w,
                height = size.h,
                iterations,
                "spiral search gave up"
            );
            return Err(LayoutError::PlacementTimeout {
                width: size.w,
                height: size.h,
                iterations,
            });
        }
        iterations += 1;
        angle += cfg.spiral_angle_step;
        let radius = cfg.spiral_step * angle;
        rect = RectI::at(polar_offset(start, radius, angle), size);
    }

    Ok(SpiralPlacement { rect, iterations })
}
