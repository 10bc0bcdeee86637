//! Decade-rounded year bounds and axis helpers.

use serde::{Deserialize, Serialize};

const DECADE: i32 = 10;

/// Global timeline bounds, rounded outward to decade boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Horizontal placement of a bar, as percentages of the axis span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarExtent {
    pub left: f64,
    pub width: f64,
}

impl YearRange {
    /// Builds a range from observed extrema, flooring `min` and ceiling `max`
    /// to the nearest multiple of ten. Bounds saturate at the `i32` limits.
    pub fn from_extrema(min: i32, max: i32) -> Self {
        debug_assert!(min <= max);
        let ceil_decades = max.div_euclid(DECADE) + i32::from(max.rem_euclid(DECADE) != 0);
        Self {
            min: min.div_euclid(DECADE).saturating_mul(DECADE),
            max: ceil_decades.saturating_mul(DECADE),
        }
    }

    pub fn span(&self) -> i32 {
        self.max - self.min
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Decade tick marks from `min` to `max`, inclusive.
    pub fn decade_ticks(&self) -> impl Iterator<Item = i32> {
        (self.min..=self.max).step_by(DECADE as usize)
    }

    /// Left offset and width of a `[start, end]` bar. A zero-width axis
    /// places every bar across the full width.
    pub fn bar_extent(&self, start: i32, end: i32) -> BarExtent {
        let span = self.span();
        if span == 0 {
            return BarExtent {
                left: 0.0,
                width: 100.0,
            };
        }
        let span = f64::from(span);
        BarExtent {
            left: f64::from(start - self.min) / span * 100.0,
            width: f64::from(end - start) / span * 100.0,
        }
    }
}
