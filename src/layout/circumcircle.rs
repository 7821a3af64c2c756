// Running circumradius of the cloud.

use super::{PointI, RectI};

/// Distance from `center` to the farthest corner of `rect`.
pub fn corner_radius(center: PointI, rect: &RectI) -> f64 {
    rect.corners()
        .iter()
        .map(|c| {
            let dx = f64::from(c.x - center.x);
            let dy = f64::from(c.y - center.y);
            dx.hypot(dy)
        })
        .fold(0.0, f64::max)
}

/// Max corner distance over every rectangle recorded so far. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircumcircleTracker {
    radius: f64,
}

impl CircumcircleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a newly placed rectangle in and return the updated radius.
    pub fn record(&mut self, center: PointI, rect: &RectI) -> f64 {
        self.radius = self.radius.max(corner_radius(center, rect));
        self.radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
