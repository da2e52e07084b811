//! Per-field extents and the shared padded world range

use super::{Dataset, Field};
use crate::constants::bounds::{MIN_SPAN, PAD_RATIO};

/// Closed numeric interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min/max of a slice, `None` when empty or any value is not finite
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut iter = values.iter().copied();
        let first = iter.next()?;
        let extent = iter.fold(Self::new(first, first), |acc, v| {
            Self::new(acc.min.min(v), acc.max.max(v))
        });
        values.iter().all(|v| v.is_finite()).then_some(extent)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Data-driven extents of the four numeric fields plus the world range.
///
/// Built in one piece from a dataset, so a half-updated value can never be
/// observed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Temperature
    pub x1: Extent,
    /// Wind speed
    pub y1: Extent,
    /// Relative humidity
    pub x2: Extent,
    /// Fuel moisture
    pub y2: Extent,
    /// `[min(all) - pad, max(all) + pad]`, shared by both axes
    pub world: Extent,
}

impl Bounds {
    /// Compute bounds; `None` for an empty dataset or non-finite values
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        profiling::scope!("Bounds::from_dataset");

        let bounds = Self::from_extents(
            Extent::of(dataset.values(Field::X1))?,
            Extent::of(dataset.values(Field::Y1))?,
            Extent::of(dataset.values(Field::X2))?,
            Extent::of(dataset.values(Field::Y2))?,
        );
        bounds.world.is_finite().then_some(bounds)
    }

    /// Derive the world range from four field extents
    pub fn from_extents(x1: Extent, y1: Extent, x2: Extent, y2: Extent) -> Self {
        let all = [x1, y1, x2, y2];
        let lo = all.iter().map(|e| e.min).fold(f64::INFINITY, f64::min);
        let hi = all.iter().map(|e| e.max).fold(f64::NEG_INFINITY, f64::max);
        let pad = PAD_RATIO * (hi - lo).max(MIN_SPAN);

        Self {
            x1,
            y1,
            x2,
            y2,
            world: Extent::new(lo - pad, hi + pad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Dataset {
        Dataset::from_rows([("0", 60.0, 5.0, 40.0, 10.0), ("1", 80.0, 12.0, 30.0, 8.0)]).unwrap()
    }

    #[test]
    fn test_scenario_bounds() {
        let b = Bounds::from_dataset(&scenario()).unwrap();
        assert_eq!(b.x1, Extent::new(60.0, 80.0));
        assert_eq!(b.y1, Extent::new(5.0, 12.0));
        assert_eq!(b.x2, Extent::new(30.0, 40.0));
        assert_eq!(b.y2, Extent::new(8.0, 10.0));
        // span 75, pad 4.5
        assert!((b.world.min - 0.5).abs() < 1e-9);
        assert!((b.world.max - 84.5).abs() < 1e-9);
    }

    #[test]
    fn test_world_contains_every_scalar() {
        let ds = Dataset::from_rows([
            ("a", -3.5, 100.0, 0.25, 7.0),
            ("b", 12.0, 0.0, 99.0, -40.0),
            ("c", 0.0, 1.0, 2.0, 3.0),
        ])
        .unwrap();
        let b = Bounds::from_dataset(&ds).unwrap();
        let scalars = [b.x1, b.y1, b.x2, b.y2].iter().flat_map(|e| [e.min, e.max]).collect::<Vec<_>>();
        let lo = scalars.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = scalars.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(b.world.min <= lo);
        assert!(hi <= b.world.max);
        assert!(scalars.iter().all(|v| b.world.contains(*v)));
    }

    #[test]
    fn test_constant_data_uses_span_floor() {
        let ds = Dataset::from_rows([("0", 7.0, 7.0, 7.0, 7.0), ("1", 7.0, 7.0, 7.0, 7.0)]).unwrap();
        let b = Bounds::from_dataset(&ds).unwrap();
        // span floored at 1.0, so pad is 0.06 on each side
        assert!((b.world.span() - 0.12).abs() < 1e-9);
        assert!((b.world.min - 6.94).abs() < 1e-9);
        assert!((b.world.max - 7.06).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        assert!(Bounds::from_dataset(&Dataset::default()).is_none());
    }

    #[test]
    fn test_extent_of_rejects_non_finite() {
        assert_eq!(Extent::of(&[1.0, 3.0, 2.0]), Some(Extent::new(1.0, 3.0)));
        assert_eq!(Extent::of(&[1.0, f64::INFINITY]), None);
        assert_eq!(Extent::of(&[]), None);
    }
}
