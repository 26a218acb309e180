//! Headless scroll-anchor correction for lists that grow in both directions.
//!
//! When content is inserted above the viewport, the content coordinate space shifts under the
//! user. This crate moves the scroll offset by the same amount so the visible window stays put,
//! and, if a fling is in flight, restarts it from the corrected offset at the same directed
//! velocity so the motion carries on without a visible jump.
//!
//! It is UI-agnostic. A host scroll surface is expected to provide (see [`ScrollSurface`]):
//! - get/set of the primary-axis offset
//! - viewport extent and padding
//! - redraw scheduling
//! - optionally, access to its fling animation ([`AnimationSnapshotProvider`])
//!
//! For simulated surfaces and view wiring, see the `bidiscroll-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cell;
mod corrector;
mod error;
mod options;
mod redriver;
mod surface;
mod types;

#[cfg(test)]
mod tests;

pub use cell::{Cell, CellAnchor, CellContainer, capture_cell_anchor, shift_since};
pub use corrector::ScrollAnchorCorrector;
pub use error::{AnchorError, CapabilityError, Result};
pub use options::{CorrectorOptions, LARGE_FINITE};
pub use redriver::{DecelerationRedriver, FlingBounds};
pub use surface::{AnimationSnapshotProvider, ScrollSurface};
pub use types::{
    AnimationHandle, Axis, Bounds, CorrectorPhase, DecelerationSnapshot, Direction,
    FlingRequest, FlingXy, Padding, PendingShift, Point, ShiftOutcome,
};
