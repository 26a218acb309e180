use crate::{
    AnimationHandle, Axis, CapabilityError, DecelerationSnapshot, FlingRequest, Padding,
};

/// The capabilities a host scroll surface lends to the corrector.
///
/// Implementations are driven from the thread that owns the surface; every method is
/// synchronous.
pub trait ScrollSurface {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    /// Current offset along the primary axis.
    fn scroll_offset(&self) -> f64;

    /// Sets the primary-axis offset in one step, without animating.
    fn set_scroll_offset(&mut self, offset: f64);

    fn cross_offset(&self) -> f64 {
        0.0
    }

    /// Size of the surface along the primary axis, padding included.
    fn viewport_extent(&self) -> f64;

    fn padding(&self) -> Padding {
        Padding::default()
    }

    /// Schedules a redraw for the next display frame.
    fn request_redraw(&mut self);

    /// Hands out the surface's deceleration animation, if it can be reached.
    fn deceleration(&mut self) -> Result<&mut dyn AnimationSnapshotProvider, CapabilityError>;

    /// Viewport extent minus padding, never negative.
    fn scroll_window_extent(&self) -> f64 {
        let padding = self.padding();
        (self.viewport_extent() - padding.start - padding.end).max(0.0)
    }
}

/// Access to a host's fling animation.
pub trait AnimationSnapshotProvider {
    fn snapshot(&self) -> DecelerationSnapshot;

    /// Stops the animation. No further ticks are delivered for it.
    fn cancel(&mut self);

    fn fling(&mut self, request: FlingRequest) -> AnimationHandle;
}
