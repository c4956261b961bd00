//! Interval geometry shared by all domain implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A closed interval `[min, max]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedInterval {
    pub min: f64,
    pub max: f64,
}

impl ClosedInterval {
    /// Build an interval for dimension `index`, rejecting `min > max` and NaN endpoints.
    pub fn new(index: usize, min: f64, max: f64) -> Result<Self, DomainError> {
        // `!(min <= max)` also catches NaN on either side.
        if !(min <= max) {
            return Err(DomainError::InvalidBounds { index, min, max });
        }
        Ok(Self { min, max })
    }

    /// The unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// True when the interval is a single point.
    pub fn is_empty(&self) -> bool {
        self.length() == 0.0
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_ordered_bounds() {
        let interval = ClosedInterval::new(0, -1.5, 2.5).unwrap();
        assert_eq!(interval.length(), 4.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(2.5));
        assert!(!interval.contains(2.6));
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        let err = ClosedInterval::new(3, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidBounds {
                index: 3,
                min: 1.0,
                max: 0.0
            }
        );
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(ClosedInterval::new(0, f64::NAN, 1.0).is_err());
        assert!(ClosedInterval::new(0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate_interval() {
        let point = ClosedInterval::new(0, 2.0, 2.0).unwrap();
        assert!(point.is_empty());
        assert!(!ClosedInterval::unit().is_empty());
        assert_eq!(format!("{}", ClosedInterval::unit()), "[0, 1]");
    }
}
