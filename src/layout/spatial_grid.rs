// Spatial hash grid behind the placed set.
//
// Buckets rectangle indices by the grid cells they cover, so an overlap check
// only looks at rectangles sharing a cell with the candidate instead of the
// whole set. Cells are computed on closed bounds (right/bottom inclusive) to
// match the inclusive intersection policy: touching rectangles always share
// a cell.

use super::RectI;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: i32,
    /// Cell coordinates -> indices into the owning placed list.
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Cell size should be roughly the size of a typical rectangle.
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size: cell_size.max(1),
            cells: HashMap::new(),
        }
    }

    fn cell_range(&self, rect: &RectI) -> impl Iterator<Item = (i32, i32)> {
        let min_x = rect.left().div_euclid(self.cell_size);
        let max_x = rect.right().div_euclid(self.cell_size);
        let min_y = rect.top().div_euclid(self.cell_size);
        let max_y = rect.bottom().div_euclid(self.cell_size);
        (min_x..=max_x).flat_map(move |cx| (min_y..=max_y).map(move |cy| (cx, cy)))
    }

    pub fn insert(&mut self, index: usize, rect: &RectI) {
        let cells: Vec<(i32, i32)> = self.cell_range(rect).collect();
        for cell in cells {
            self.cells.entry(cell).or_default().push(index);
        }
    }

    /// Indices of rectangles sharing at least one cell with `rect`.
    /// May include false positives; caller does the exact test.
    pub fn query(&self, rect: &RectI) -> Vec<usize> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for cell in self.cell_range(rect) {
            if let Some(indices) = self.cells.get(&cell) {
                for &i in indices {
                    if seen.insert(i) {
                        result.push(i);
                    }
                }
            }
        }
        result
    }

    pub fn intersects_any(&self, rect: &RectI, placed: &[RectI]) -> bool {
        self.query(rect).into_iter().any(|i| rect.intersects(&placed[i]))
    }
}
