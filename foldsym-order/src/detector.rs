//! The order-detection seam.

use foldsym_core::Result;

/// A strategy for estimating the integer order of rotational symmetry of a
/// structural self-alignment.
///
/// Implementations receive the magnitude of the measured rotation angle, in
/// radians; any external sign convention is normalized away before the call.
/// An estimate of 1 means no non-trivial rotational symmetry is supported by
/// the input.
pub trait OrderDetector {
    /// Estimate the symmetry order from a measured rotation angle (radians).
    ///
    /// Fails with [`FoldsymError::OrderDetection`] when the angle is not a
    /// usable magnitude, so a broken upstream geometry computation is never
    /// absorbed into a silent default.
    ///
    /// [`FoldsymError::OrderDetection`]: foldsym_core::FoldsymError::OrderDetection
    fn detect(&self, angle: f64) -> Result<u32>;
}
