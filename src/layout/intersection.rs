// Overlap tests against the set of placed rectangles.
//
// Every search (spiral, inward seek, tightening) asks the same question:
// does this candidate touch anything already placed? All of them go through
// `PlacedSet::intersects_any`, which uses `RectI::intersects` and nothing
// else.

use super::spatial_grid::SpatialGrid;
use super::RectI;

/// Linear scan over a plain slice. O(n) per call.
pub fn intersects_any(candidate: &RectI, placed: &[RectI]) -> bool {
    placed.iter().any(|r| candidate.intersects(r))
}

/// Insertion-ordered placed rectangles plus an optional spatial index.
#[derive(Debug, Clone, Default)]
pub struct PlacedSet {
    rects: Vec<RectI>,
    grid: Option<SpatialGrid>,
}

impl PlacedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(cell_size: i32) -> Self {
        Self {
            rects: Vec::new(),
            grid: Some(SpatialGrid::new(cell_size)),
        }
    }

    pub fn push(&mut self, rect: RectI) {
        if let Some(grid) = &mut self.grid {
            grid.insert(self.rects.len(), &rect);
        }
        self.rects.push(rect);
    }

    pub fn intersects_any(&self, candidate: &RectI) -> bool {
        match &self.grid {
            Some(grid) => grid.intersects_any(candidate, &self.rects),
            None => intersects_any(candidate, &self.rects),
        }
    }

    pub fn as_slice(&self) -> &[RectI] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
