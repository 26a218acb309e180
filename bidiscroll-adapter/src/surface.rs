use bidiscroll::{
    AnimationHandle, AnimationSnapshotProvider, Axis, Bounds, CapabilityError, Padding,
    ScrollSurface,
};

use crate::{Scroller, ScrollerOptions};

/// What a [`SimulatedSurface`] exposes in place of its fling animation.
///
/// The non-`Available` variants mimic hosts whose fling state cannot be reached.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollerSlot {
    Available(Scroller),
    Missing,
    Foreign(&'static str),
    Locked(&'static str),
}

/// Geometry for a [`SimulatedSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedSurfaceOptions {
    pub axis: Axis,
    pub viewport_extent: f64,
    pub padding: Padding,
    /// Offsets reachable by user flings.
    pub scroll_range: Bounds,
    pub scroller: ScrollerOptions,
}

impl Default for SimulatedSurfaceOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            viewport_extent: 800.0,
            padding: Padding::default(),
            scroll_range: Bounds::new(0.0, 10_000.0),
            scroller: ScrollerOptions::default(),
        }
    }
}

impl SimulatedSurfaceOptions {
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: f64) -> Self {
        self.viewport_extent = viewport_extent.max(0.0);
        self
    }

    pub fn with_padding(mut self, start: f64, end: f64) -> Self {
        self.padding = Padding { start, end };
        self
    }

    pub fn with_scroll_range(mut self, scroll_range: Bounds) -> Self {
        self.scroll_range = scroll_range;
        self
    }

    pub fn with_scroller(mut self, scroller: ScrollerOptions) -> Self {
        self.scroller = scroller;
        self
    }
}

/// An in-memory host scroll surface driven by explicit frame times.
///
/// Redraw requests coalesce into one pending frame. [`SimulatedSurface::frame`] consumes it,
/// steps the scroller and copies the scroller's position into the offset.
#[derive(Clone, Debug)]
pub struct SimulatedSurface {
    options: SimulatedSurfaceOptions,
    offset: f64,
    cross_offset: f64,
    slot: ScrollerSlot,
    frame_pending: bool,
    redraw_requests: usize,
    frames: usize,
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new(SimulatedSurfaceOptions::default())
    }
}

impl SimulatedSurface {
    pub fn new(options: SimulatedSurfaceOptions) -> Self {
        Self {
            slot: ScrollerSlot::Available(Scroller::new(options.scroller)),
            options,
            offset: 0.0,
            cross_offset: 0.0,
            frame_pending: false,
            redraw_requests: 0,
            frames: 0,
        }
    }

    pub fn with_slot(mut self, slot: ScrollerSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn options(&self) -> &SimulatedSurfaceOptions {
        &self.options
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.options.viewport_extent = viewport_extent.max(0.0);
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.options.padding = padding;
    }

    pub fn set_scroll_range(&mut self, scroll_range: Bounds) {
        self.options.scroll_range = scroll_range;
    }

    pub fn scroller(&self) -> Option<&Scroller> {
        match &self.slot {
            ScrollerSlot::Available(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_flinging(&self) -> bool {
        self.scroller().is_some_and(|s| !s.is_finished())
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame_pending
    }

    /// Number of redraw requests, coalesced or not.
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Number of frames drawn.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Starts a user fling (drag release) from the current offset.
    ///
    /// Returns `None` when the surface has no reachable scroller, in which case nothing moves.
    pub fn fling(&mut self, velocity: f64, now_ms: u64) -> Option<AnimationHandle> {
        let offset = self.offset;
        let range = self.options.scroll_range;
        let overscroll = self.scroll_window_extent() / 2.0;
        let ScrollerSlot::Available(scroller) = &mut self.slot else {
            return None;
        };
        scroller.advance(now_ms);
        let handle = scroller.start_fling(offset, velocity, range, overscroll);
        self.request_redraw();
        Some(handle)
    }

    /// Draws a frame at `now_ms` if one was requested.
    ///
    /// Returns `true` when a frame was drawn.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        if !std::mem::take(&mut self.frame_pending) {
            return false;
        }
        self.frames += 1;

        let ScrollerSlot::Available(scroller) = &mut self.slot else {
            return true;
        };
        if scroller.advance(now_ms) {
            self.offset = scroller.position();
            if !scroller.is_finished() {
                self.request_redraw();
            }
        }
        true
    }

    /// Draws frames every `step_ms` until nothing is pending or `until_ms` is reached.
    ///
    /// Returns the time of the last frame drawn.
    pub fn run_frames(&mut self, mut now_ms: u64, step_ms: u64, until_ms: u64) -> u64 {
        let step_ms = step_ms.max(1);
        let mut last = now_ms;
        while now_ms <= until_ms && self.frame(now_ms) {
            last = now_ms;
            now_ms += step_ms;
        }
        last
    }
}

impl ScrollSurface for SimulatedSurface {
    fn axis(&self) -> Axis {
        self.options.axis
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn cross_offset(&self) -> f64 {
        self.cross_offset
    }

    fn viewport_extent(&self) -> f64 {
        self.options.viewport_extent
    }

    fn padding(&self) -> Padding {
        self.options.padding
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
        self.frame_pending = true;
    }

    fn deceleration(&mut self) -> Result<&mut dyn AnimationSnapshotProvider, CapabilityError> {
        match &mut self.slot {
            ScrollerSlot::Available(scroller) => Ok(scroller),
            ScrollerSlot::Missing => Err(CapabilityError::Unavailable),
            ScrollerSlot::Foreign(found) => Err(CapabilityError::UnexpectedShape { found: *found }),
            ScrollerSlot::Locked(reason) => Err(CapabilityError::AccessDenied { reason: *reason }),
        }
    }
}
