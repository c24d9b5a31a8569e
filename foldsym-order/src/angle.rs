//! Order estimation from the rotation angle alone.
//!
//! Searches for an order `k` such that the observed angle closely matches
//! `2π/k`. This misses many valid rotations and is retained for reproducing
//! published results; superposition-based detectors behind the same
//! [`OrderDetector`] trait should be preferred for new analyses.

use std::f64::consts::PI;

use foldsym_core::{FoldsymError, Result};

use crate::detector::OrderDetector;

/// Guesses an order of rotational symmetry from the angle alone.
#[derive(Debug, Clone)]
pub struct AngleOrderDetector {
    max_order: u32,
    angle_error: f64,
}

impl AngleOrderDetector {
    /// Default upper bound (exclusive) on the candidate order.
    pub const DEFAULT_MAX_ORDER: u32 = 8;

    /// Create a detector with the default maximum order.
    ///
    /// `angle_error` is the largest angular deviation, in radians, at which
    /// a candidate order is still accepted.
    pub fn new(angle_error: f64) -> Result<Self> {
        Self::with_max_order(Self::DEFAULT_MAX_ORDER, angle_error)
    }

    /// Create a detector considering candidate orders `2..max_order`.
    pub fn with_max_order(max_order: u32, angle_error: f64) -> Result<Self> {
        if max_order < 2 {
            return Err(FoldsymError::InvalidInput(format!(
                "AngleOrderDetector: max_order must be >= 2, got {}",
                max_order,
            )));
        }
        if !angle_error.is_finite() || angle_error < 0.0 {
            return Err(FoldsymError::InvalidInput(format!(
                "AngleOrderDetector: angle_error must be finite and >= 0, got {}",
                angle_error,
            )));
        }
        Ok(Self {
            max_order,
            angle_error,
        })
    }

    /// Maximum candidate order (exclusive).
    pub fn max_order(&self) -> u32 {
        self.max_order
    }

    /// Accepted angular deviation, in radians.
    pub fn angle_error(&self) -> f64 {
        self.angle_error
    }
}

impl OrderDetector for AngleOrderDetector {
    fn detect(&self, angle: f64) -> Result<u32> {
        if !angle.is_finite() || angle < 0.0 {
            return Err(FoldsymError::OrderDetection(format!(
                "rotation angle must be a finite non-negative magnitude, got {}",
                angle,
            )));
        }

        let mut best_delta = self.angle_error;
        let mut best_order = 1;
        for order in 2..self.max_order {
            let delta = (2.0 * PI / order as f64 - angle).abs();
            // strict comparison: on a tie the earlier (smaller) order wins
            if delta < best_delta {
                best_order = order;
                best_delta = delta;
            }
        }
        Ok(best_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_turn_is_twofold() {
        let detector = AngleOrderDetector::with_max_order(8, 0.1).unwrap();
        assert_eq!(detector.detect(PI).unwrap(), 2);
    }

    #[test]
    fn angle_outside_tolerance_is_trivial() {
        // 2.5 rad sits between 2pi/2 and 2pi/3, more than 0.05 from both
        let detector = AngleOrderDetector::with_max_order(8, 0.05).unwrap();
        assert_eq!(detector.detect(2.5).unwrap(), 1);
    }

    #[test]
    fn exact_match_for_higher_orders() {
        let detector = AngleOrderDetector::new(0.1).unwrap();
        for order in 2..AngleOrderDetector::DEFAULT_MAX_ORDER {
            let angle = 2.0 * PI / order as f64;
            assert_eq!(detector.detect(angle).unwrap(), order);
        }
    }

    #[test]
    fn max_order_is_exclusive() {
        // 2pi/8 is never considered with max_order = 8
        let detector = AngleOrderDetector::with_max_order(8, 0.01).unwrap();
        assert_eq!(detector.detect(2.0 * PI / 8.0).unwrap(), 1);
    }

    #[test]
    fn zero_tolerance_never_matches() {
        // the deviation must be strictly below the tolerance
        let detector = AngleOrderDetector::with_max_order(8, 0.0).unwrap();
        assert_eq!(detector.detect(PI).unwrap(), 1);
    }

    #[test]
    fn rejects_bad_angles() {
        let detector = AngleOrderDetector::new(0.1).unwrap();
        assert!(detector.detect(-0.5).is_err());
        assert!(detector.detect(f64::NAN).is_err());
        assert!(detector.detect(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(AngleOrderDetector::with_max_order(1, 0.1).is_err());
        assert!(AngleOrderDetector::with_max_order(8, -0.1).is_err());
        assert!(AngleOrderDetector::with_max_order(8, f64::NAN).is_err());
    }
}
