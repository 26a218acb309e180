//! Adapter utilities for the `bidiscroll` crate.
//!
//! The `bidiscroll` crate only knows host surfaces through traits. This crate provides the
//! pieces an adapter or a test harness needs around it:
//!
//! - A constant-deceleration fling [`Scroller`] that exposes its state for re-driving
//! - A frame-driven [`SimulatedSurface`] implementing `ScrollSurface`
//! - [`BidirectionalScrollView`], the surface + corrector pair with layout-facing setters
//! - A [`ComponentRegistry`] for wiring views into a host rendering tree
//!
//! This crate is intentionally framework-agnostic.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod registry;
mod scroller;
mod surface;
mod view;


pub use registry::{
    CELL_CONTAINER, Component, ComponentFactory, ComponentRegistry, RegistryError, SCROLL_VIEW,
};
pub use scroller::{Scroller, ScrollerOptions};
pub use surface::{ScrollerSlot, SimulatedSurface, SimulatedSurfaceOptions};
pub use view::BidirectionalScrollView;
