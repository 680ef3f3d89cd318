//! Interval arithmetic for ray parameter ranges.

/// Closed interval [min, max] of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f64) -> Self {
        Self { min: self.min, max }
    }
}
