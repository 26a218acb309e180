use crate::{
    AnimationHandle, AnimationSnapshotProvider, Bounds, CorrectorOptions, Direction,
    FlingRequest, Point,
};

/// Limits for a replacement fling on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingBounds {
    pub main: Bounds,
    pub cross: Bounds,
}

impl FlingBounds {
    /// `{0, forward_limit}` on the primary axis, pinned to zero on the cross axis.
    pub fn forward_only(forward_limit: f64) -> Self {
        Self {
            main: Bounds::new(0.0, forward_limit),
            cross: Bounds::ZERO,
        }
    }
}

/// Restarts a cancelled fling from a corrected offset with the same directed velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecelerationRedriver {
    forward_limit: f64,
    overscroll_ratio: f64,
}

impl Default for DecelerationRedriver {
    fn default() -> Self {
        Self::new(&CorrectorOptions::default())
    }
}

impl DecelerationRedriver {
    pub fn new(options: &CorrectorOptions) -> Self {
        Self {
            forward_limit: options.forward_limit,
            overscroll_ratio: options.overscroll_ratio,
        }
    }

    pub fn bounds(&self) -> FlingBounds {
        FlingBounds::forward_only(self.forward_limit)
    }

    /// Primary-axis overscroll allowed for a surface whose scroll window has this extent.
    pub fn overscroll_for(&self, scroll_window_extent: f64) -> f64 {
        (scroll_window_extent * self.overscroll_ratio).max(0.0)
    }

    /// Builds the replacement fling, or `None` when there is no motion to carry over.
    ///
    /// Only the primary axis moves: cross-axis velocity, bounds and overscroll are zero
    /// whatever `bounds.cross` says.
    pub fn plan(
        &self,
        direction: Direction,
        velocity: f64,
        new_start: Point,
        bounds: FlingBounds,
        overscroll_main: f64,
    ) -> Option<FlingRequest> {
        if velocity == 0.0 || !velocity.is_finite() {
            return None;
        }
        Some(FlingRequest {
            start: new_start,
            velocity: Point::new(direction.sign() * velocity.abs(), 0.0),
            bounds_main: bounds.main,
            bounds_cross: Bounds::ZERO,
            overscroll: Point::new(overscroll_main.max(0.0), 0.0),
        })
    }

    /// Issues the replacement fling on `provider`.
    ///
    /// The caller must already have cancelled the previous animation.
    pub fn rederive(
        &self,
        provider: &mut dyn AnimationSnapshotProvider,
        direction: Direction,
        velocity: f64,
        new_start: Point,
        bounds: FlingBounds,
        overscroll_main: f64,
    ) -> Option<AnimationHandle> {
        let request = self.plan(direction, velocity, new_start, bounds, overscroll_main)?;
        atrace!(
            start = request.start.main,
            velocity = request.velocity.main,
            max = request.bounds_main.max,
            "DecelerationRedriver::rederive"
        );
        Some(provider.fling(request))
    }
}
