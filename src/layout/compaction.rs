// Compaction of a freshly placed rectangle.
//
// Two stages, both working against the already placed set only:
// 1. seek_better_place: sample a short inward spiral from the rectangle's
//    current distance toward the center, keep the free sample with the
//    smallest corner radius (optional).
// 2. tighten_cloud_region: slide the rectangle one unit at a time toward the
//    center, Y axis then X axis, until a full pass moves nothing.
//
// Neither stage ever increases the rectangle's corner radius.

use super::circumcircle::corner_radius;
use super::intersection::PlacedSet;
use super::spiral::polar_offset;
use super::{LayoutConfig, PointI, RectI};

pub fn compact(
    rect: RectI,
    center: PointI,
    circumradius: f64,
    placed: &PlacedSet,
    cfg: &LayoutConfig,
) -> RectI {
    let rect = if cfg.seek_better_place {
        seek_better_place(rect, center, circumradius, placed, cfg)
    } else {
        rect
    };
    tighten_cloud_region(rect, center, placed)
}

/// Inward spiral search bounded by `circumradius`.
///
/// The sweep starts at the rectangle's current angle and distance (capped at
/// `circumradius`) and shrinks the radius linearly to zero over
/// `cfg.seek_steps` samples, turning by `cfg.seek_angle_step` each time.
pub fn seek_better_place(
    rect: RectI,
    center: PointI,
    circumradius: f64,
    placed: &PlacedSet,
    cfg: &LayoutConfig,
) -> RectI {
    let size = rect.size();
    let origin = PointI { x: center.x - size.w / 2, y: center.y - size.h / 2 };
    let own = rect.center();
    let dx = f64::from(own.x - center.x);
    let dy = f64::from(own.y - center.y);
    let start_radius = dx.hypot(dy).min(circumradius);
    let start_angle = dy.atan2(dx);

    let mut best = rect;
    let mut best_radius = corner_radius(center, &rect);
    let steps = f64::from(cfg.seek_steps);

    for k in 1..=cfg.seek_steps {
        let k = f64::from(k);
        let radius = start_radius * (1.0 - k / steps);
        let angle = start_angle + k * cfg.seek_angle_step;
        let candidate = RectI::at(polar_offset(origin, radius, angle), size);
        let r = corner_radius(center, &candidate);
        if r < best_radius && !placed.intersects_any(&candidate) {
            best = candidate;
            best_radius = r;
        }
    }

    best
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Greedy axis-aligned pull toward the center, iterated to a fixpoint.
pub fn tighten_cloud_region(rect: RectI, center: PointI, placed: &PlacedSet) -> RectI {
    let mut rect = rect;
    let mut passes = 0_u32;
    loop {
        let before = rect;
        rect = pull(rect, center, placed, Axis::Y);
        rect = pull(rect, center, placed, Axis::X);
        passes += 1;
        if rect == before {
            break;
        }
    }
    tracing::trace!(passes, x = rect.x, y = rect.y, "tightening converged");
    rect
}

/// Move `rect` toward the center along one axis while it stays free.
///
/// Stops once the leading edge reaches the center line, so a rectangle
/// never crosses over to the other side. A rectangle already straddling the
/// center line does not move on that axis.
fn pull(rect: RectI, center: PointI, placed: &PlacedSet, axis: Axis) -> RectI {
    let (own, target) = match axis {
        Axis::X => (rect.center().x, center.x),
        Axis::Y => (rect.center().y, center.y),
    };
    let dir = if own > target { -1 } else { 1 };

    let can_advance = |r: &RectI| {
        let (near, far) = match axis {
            Axis::X => (r.left(), r.right()),
            Axis::Y => (r.top(), r.bottom()),
        };
        if dir < 0 { near > target } else { far < target }
    };

    let mut rect = rect;
    while can_advance(&rect) {
        let next = match axis {
            Axis::X => rect.translate(dir, 0),
            Axis::Y => rect.translate(0, dir),
        };
        if placed.intersects_any(&next) {
            break;
        }
        rect = next;
    }
    rect
}
