//! Shared primitives for the foldsym structural-symmetry analysis workspace.
//!
//! `foldsym-core` provides the foundation the other foldsym crates build on:
//!
//! - **Error types** — [`FoldsymError`] and [`Result`] for structured error handling
//! - **Traits** — Small cross-crate abstractions like [`Summarizable`] and [`Scored`]

pub mod error;
pub mod traits;

pub use error::{FoldsymError, Result};
pub use traits::*;
