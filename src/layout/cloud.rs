// The layouter facade: owns the center, the placed set and the circumradius.

use std::f64::consts::PI;

use super::circumcircle::CircumcircleTracker;
use super::compaction::compact;
use super::intersection::PlacedSet;
use super::spiral::find_place;
use super::{LayoutConfig, PointI, RectI, SizeI};
use crate::error::{LayoutError, Result};

/// Append-only circular cloud of rectangles around a fixed center.
///
/// Not meant for concurrent mutation; wrap it in a lock if several callers
/// share one layout.
#[derive(Debug, Clone)]
pub struct CircularCloudLayouter {
    center: PointI,
    cfg: LayoutConfig,
    placed: PlacedSet,
    circumcircle: CircumcircleTracker,
}

impl CircularCloudLayouter {
    /// Layouter with the default configuration.
    pub fn new(center: PointI) -> Self {
        let cfg = LayoutConfig::default();
        Self {
            center,
            placed: PlacedSet::new(),
            circumcircle: CircumcircleTracker::new(),
            cfg,
        }
    }

    pub fn with_config(center: PointI, cfg: LayoutConfig) -> Result<Self> {
        cfg.validate()?;
        let placed = match cfg.index_cell_size {
            Some(cell) => PlacedSet::with_index(cell),
            None => PlacedSet::new(),
        };
        Ok(Self {
            center,
            cfg,
            placed,
            circumcircle: CircumcircleTracker::new(),
        })
    }

    /// Find a spot for a rectangle of `size`, record it and return it.
    pub fn place_next(&mut self, size: SizeI) -> Result<RectI> {
        if size.w <= 0 || size.h <= 0 {
            return Err(LayoutError::InvalidSize { width: size.w, height: size.h });
        }

        let found = find_place(self.center, size, &self.placed, &self.cfg)?;
        let rect = if self.cfg.compact {
            compact(found.rect, self.center, self.circumcircle.radius(), &self.placed, &self.cfg)
        } else {
            found.rect
        };

        self.placed.push(rect);
        let radius = self.circumcircle.record(self.center, &rect);

        tracing::debug!(
            index = self.placed.len() - 1,
            w = size.w,
            h = size.h,
            x = rect.x,
            y = rect.y,
            spiral_iterations = found.iterations,
            moved_x = rect.x - found.rect.x,
            moved_y = rect.y - found.rect.y,
            circumradius = radius,
            "placed rectangle"
        );
        Ok(rect)
    }

    /// Placed rectangles in insertion order.
    pub fn current_layout(&self) -> &[RectI] {
        self.placed.as_slice()
    }

    pub fn center(&self) -> PointI {
        self.center
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Farthest corner distance from the center over all placed rectangles.
    pub fn circumradius(&self) -> f64 {
        self.circumcircle.radius()
    }

    pub fn circumcircle_area(&self) -> f64 {
        PI * self.circumradius() * self.circumradius()
    }

    /// Sum of the placed rectangles' areas.
    pub fn covered_area(&self) -> i64 {
        self.current_layout().iter().map(RectI::area).sum()
    }

    /// Covered area over circumcircle area; 0 for an empty cloud.
    pub fn coverage(&self) -> f64 {
        let circle = self.circumcircle_area();
        if circle > 0.0 { self.covered_area() as f64 / circle } else { 0.0 }
    }

    pub fn bounding_box(&self) -> Option<RectI> {
        let mut it = self.current_layout().iter();
        let first = *it.next()?;
        Some(it.fold(first, |bb, r| bb.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CENTER: PointI = PointI { x: 960, y: 512 };

    /// Deterministic LCG pseudo-random number generator.
    struct Lcg(u64);

    impl Lcg {
        fn new(seed: u64) -> Self {
            Self(seed)
        }
        fn next_u32(&mut self) -> u32 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (self.0 >> 33) as u32
        }
        /// Uniform in `lo..=hi`.
        fn range(&mut self, lo: i32, hi: i32) -> i32 {
            lo + (self.next_u32() % (hi - lo + 1) as u32) as i32
        }
    }

    fn random_sizes(seed: u64, count: usize) -> Vec<SizeI> {
        let mut rng = Lcg::new(seed);
        (0..count)
            .map(|_| SizeI { w: rng.range(50, 250), h: rng.range(30, 60) })
            .collect()
    }

    fn layout_all(sizes: &[SizeI], cfg: LayoutConfig) -> CircularCloudLayouter {
        let mut layouter = CircularCloudLayouter::with_config(CENTER, cfg).unwrap();
        for &size in sizes {
            layouter.place_next(size).unwrap();
        }
        layouter
    }

    fn no_compaction() -> LayoutConfig {
        LayoutConfig { compact: false, ..LayoutConfig::default() }
    }

    fn assert_no_overlaps(rects: &[RectI]) {
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "{:?} intersects {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_first_rect_centered() {
        let mut layouter = CircularCloudLayouter::new(CENTER);
        let rect = layouter.place_next(SizeI { w: 100, h: 40 }).unwrap();
        assert_eq!(rect, RectI { x: 910, y: 492, w: 100, h: 40 });
        assert_eq!(layouter.center(), CENTER);
        assert_eq!(layouter.current_layout(), &[rect]);
    }

    #[test]
    fn test_zero_sizes_rejected_without_side_effects() {
        let mut layouter = CircularCloudLayouter::new(CENTER);
        layouter.place_next(SizeI { w: 20, h: 20 }).unwrap();
        let before = layouter.current_layout().to_vec();
        let radius = layouter.circumradius();

        for size in [SizeI { w: 0, h: 10 }, SizeI { w: 10, h: 0 }, SizeI { w: -5, h: 10 }] {
            let err = layouter.place_next(size).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidSize { .. }));
        }

        assert_eq!(layouter.current_layout(), before.as_slice());
        assert_eq!(layouter.circumradius(), radius);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = LayoutConfig { spiral_step: -1.0, ..LayoutConfig::default() };
        assert!(CircularCloudLayouter::with_config(CENTER, cfg).is_err());
    }

    #[test]
    fn test_timeout_leaves_layout_unchanged() {
        let cfg = LayoutConfig { max_spiral_iterations: Some(3), ..LayoutConfig::default() };
        let mut layouter = CircularCloudLayouter::with_config(CENTER, cfg).unwrap();
        layouter.place_next(SizeI { w: 400, h: 400 }).unwrap();
        let err = layouter.place_next(SizeI { w: 10, h: 10 }).unwrap_err();
        assert!(matches!(err, LayoutError::PlacementTimeout { .. }));
        assert_eq!(layouter.len(), 1);
    }

    #[test]
    fn test_identical_sizes_get_distinct_spots() {
        let sizes = vec![SizeI { w: 50, h: 70 }; 5];
        let layouter = layout_all(&sizes, LayoutConfig::default());
        let rects = layouter.current_layout();
        assert_eq!(rects.len(), 5);
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert_ne!((a.x, a.y), (b.x, b.y));
            }
        }
        assert_no_overlaps(rects);
    }

    #[test]
    fn test_compaction_shrinks_small_cloud() {
        let sizes = [
            SizeI { w: 250, h: 80 },
            SizeI { w: 120, h: 70 },
            SizeI { w: 120, h: 70 },
            SizeI { w: 120, h: 60 },
            SizeI { w: 250, h: 60 },
        ];
        let loose = layout_all(&sizes, no_compaction());
        let tight = layout_all(&sizes, LayoutConfig::default());
        assert_no_overlaps(tight.current_layout());
        assert!(
            tight.circumradius() < loose.circumradius(),
            "compacted {} vs loose {}",
            tight.circumradius(),
            loose.circumradius()
        );
    }

    #[test]
    fn test_compaction_matches_or_beats_loose_layout() {
        let sizes = random_sizes(0xC0FFEE, 80);
        let loose = layout_all(&sizes, no_compaction());
        let tight = layout_all(&sizes, LayoutConfig::default());
        assert!(tight.circumradius() <= loose.circumradius());
    }

    #[test]
    fn test_dense_cloud_coverage() {
        let sizes = random_sizes(0xDEAD_BEEF, 150);
        let layouter = layout_all(&sizes, LayoutConfig::default());
        assert_eq!(layouter.len(), 150);
        assert_no_overlaps(layouter.current_layout());
        assert!(layouter.coverage() >= 0.5, "coverage {}", layouter.coverage());
    }

    #[test]
    fn test_spatial_index_gives_same_layout() {
        let sizes = random_sizes(7, 60);
        let linear = layout_all(&sizes, LayoutConfig::default());
        let indexed = layout_all(
            &sizes,
            LayoutConfig { index_cell_size: Some(128), ..LayoutConfig::default() },
        );
        assert_eq!(linear.current_layout(), indexed.current_layout());
        assert_eq!(linear.circumradius(), indexed.circumradius());
    }

    #[test]
    fn test_layout_view_is_restartable() {
        let layouter = layout_all(&random_sizes(3, 10), LayoutConfig::default());
        let first: Vec<RectI> = layouter.current_layout().iter().copied().collect();
        let second: Vec<RectI> = layouter.current_layout().iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_metrics() {
        let mut layouter = CircularCloudLayouter::new(PointI { x: 0, y: 0 });
        assert_eq!(layouter.coverage(), 0.0);
        assert_eq!(layouter.bounding_box(), None);

        layouter.place_next(SizeI { w: 6, h: 8 }).unwrap();
        assert_eq!(layouter.circumradius(), 5.0);
        assert_eq!(layouter.covered_area(), 48);
        assert!((layouter.coverage() - 48.0 / (PI * 25.0)).abs() < 1e-9);
        assert_eq!(layouter.bounding_box(), Some(RectI { x: -3, y: -4, w: 6, h: 8 }));
    }

    fn size_strategy() -> impl Strategy<Value = SizeI> {
        (1..120i32, 1..60i32).prop_map(|(w, h)| SizeI { w, h })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_no_overlap(sizes in prop::collection::vec(size_strategy(), 1..30), compact in any::<bool>()) {
            let cfg = LayoutConfig { compact, ..LayoutConfig::default() };
            let layouter = layout_all(&sizes, cfg);
            let rects = layouter.current_layout();
            prop_assert_eq!(rects.len(), sizes.len());
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    prop_assert!(!a.intersects(b));
                }
            }
        }

        #[test]
        fn prop_circumradius_non_decreasing(sizes in prop::collection::vec(size_strategy(), 1..30)) {
            let mut layouter = CircularCloudLayouter::new(CENTER);
            let mut last = 0.0;
            for size in sizes {
                layouter.place_next(size).unwrap();
                prop_assert!(layouter.circumradius() >= last);
                last = layouter.circumradius();
            }
        }
    }
}
