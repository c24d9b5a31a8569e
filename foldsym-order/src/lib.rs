//! Order-of-symmetry estimation for the foldsym workspace.
//!
//! The order of rotational symmetry is the smallest positive integer `k`
//! such that a structure is invariant under rotation by `2π/k`.
//!
//! - **Detector seam** — the [`OrderDetector`] trait in [`detector`]
//! - **Angle matching** — [`AngleOrderDetector`] in [`angle`]
//!
//! # Quick start
//!
//! ```
//! use foldsym_order::{AngleOrderDetector, OrderDetector};
//!
//! let detector = AngleOrderDetector::new(0.1).unwrap();
//! // a 180-degree rotation supports 2-fold symmetry
//! assert_eq!(detector.detect(std::f64::consts::PI).unwrap(), 2);
//! ```

pub mod angle;
pub mod detector;

pub use angle::AngleOrderDetector;
pub use detector::OrderDetector;
