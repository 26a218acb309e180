use crate::{
    AnchorError, AnimationHandle, CorrectorOptions, CorrectorPhase, DecelerationRedriver,
    PendingShift, Point, Result, ScrollSurface, ShiftOutcome,
};

/// Outcome of the one-time probe for the host's deceleration animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ProviderLookup {
    resolved: bool,
    available: bool,
}

/// Keeps the visible window still when the content coordinate space shifts.
///
/// The corrector owns no surface. Callers pass the host surface into each call, which keeps
/// the corrector testable against a fake and lets one host own both.
///
/// A correction cycle:
/// 1. add the pending `offset_delta` to the scroll offset in one set,
/// 2. if a fling is in flight, read its direction and speed, cancel it and start an
///    equivalent one from the corrected offset,
/// 3. schedule a redraw for the next frame,
/// 4. clear the pending shift.
#[derive(Clone, Debug, Default)]
pub struct ScrollAnchorCorrector {
    options: CorrectorOptions,
    redriver: DecelerationRedriver,
    pending: PendingShift,
    phase: CorrectorPhase,
    lookup: ProviderLookup,
}

impl ScrollAnchorCorrector {
    pub fn new(options: CorrectorOptions) -> Self {
        adebug!(
            forward_limit = options.forward_limit,
            overscroll_ratio = options.overscroll_ratio,
            "ScrollAnchorCorrector::new"
        );
        Self {
            redriver: DecelerationRedriver::new(&options),
            options,
            pending: PendingShift::default(),
            phase: CorrectorPhase::Idle,
            lookup: ProviderLookup::default(),
        }
    }

    pub fn options(&self) -> &CorrectorOptions {
        &self.options
    }

    pub fn redriver(&self) -> &DecelerationRedriver {
        &self.redriver
    }

    pub fn pending(&self) -> PendingShift {
        self.pending
    }

    pub fn phase(&self) -> CorrectorPhase {
        self.phase
    }

    /// `true` once the host was found not to expose its fling animation.
    pub fn is_degraded(&self) -> bool {
        self.lookup.resolved && !self.lookup.available
    }

    /// Records the content height change that accompanies the next offset shift.
    ///
    /// This alone never moves the scroll offset.
    pub fn set_shift_height(&mut self, height_delta: f64) {
        atrace!(height_delta, "ScrollAnchorCorrector::set_shift_height");
        self.pending.height_delta = height_delta;
    }

    /// Records an offset shift and corrects for it immediately.
    pub fn set_shift_offset<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        offset_delta: f64,
    ) -> Result<ShiftOutcome> {
        atrace!(offset_delta, "ScrollAnchorCorrector::set_shift_offset");
        self.notify_shift(surface, offset_delta)
    }

    /// Queues `offset_delta` behind any shift not yet applied and runs a correction cycle.
    ///
    /// A zero or non-finite delta with nothing pending touches neither the surface nor its
    /// fling.
    pub fn notify_shift<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        offset_delta: f64,
    ) -> Result<ShiftOutcome> {
        self.record_shift(offset_delta);
        self.apply_pending(surface)
    }

    /// Queues `offset_delta` without touching the surface.
    ///
    /// Recorded shifts add up and are applied together by the next
    /// [`ScrollAnchorCorrector::on_layout_change`] or `notify_shift`.
    pub fn record_shift(&mut self, offset_delta: f64) {
        if !offset_delta.is_finite() {
            awarn!(offset_delta, "ScrollAnchorCorrector: ignoring non-finite shift");
            return;
        }
        atrace!(offset_delta, "ScrollAnchorCorrector::record_shift");
        self.pending.merge(PendingShift::new(0.0, offset_delta));
    }

    /// Applies a shift that was recorded but not yet corrected for.
    ///
    /// Call this on every layout pass.
    pub fn on_layout_change<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<ShiftOutcome> {
        self.apply_pending(surface)
    }

    /// Drops pending bookkeeping and returns to [`CorrectorPhase::Idle`].
    pub fn reset(&mut self) {
        self.pending = PendingShift::default();
        self.phase = CorrectorPhase::Idle;
    }

    fn apply_pending<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) -> Result<ShiftOutcome> {
        debug_assert_eq!(self.phase, CorrectorPhase::Idle, "correction re-entered");
        let shift = self.pending;
        if shift.is_neutral() {
            self.reset();
            return Ok(ShiftOutcome {
                offset: surface.scroll_offset(),
                ..ShiftOutcome::default()
            });
        }

        self.phase = CorrectorPhase::Correcting;
        let offset = surface.scroll_offset() + shift.offset_delta;
        surface.set_scroll_offset(offset);
        adebug!(
            offset_delta = shift.offset_delta,
            height_delta = shift.height_delta,
            offset,
            "ScrollAnchorCorrector: offset corrected"
        );

        let redrive = self.redrive(surface);
        self.reset();

        let (redriven, degraded) = match redrive {
            Ok(r) => r,
            Err(err) => {
                surface.request_redraw();
                return Err(err);
            }
        };
        if redriven.is_some() || self.options.redraw_on_static_shift {
            surface.request_redraw();
        }

        Ok(ShiftOutcome {
            applied_delta: shift.offset_delta,
            offset: surface.scroll_offset(),
            redriven,
            degraded,
        })
    }

    /// Returns the replacement fling handle, if any, and whether the fling was unreachable.
    fn redrive<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<(Option<AnimationHandle>, bool)> {
        if self.is_degraded() {
            return Ok((None, true));
        }

        let start = Point::new(surface.scroll_offset(), surface.cross_offset());
        let overscroll = self.redriver.overscroll_for(surface.scroll_window_extent());
        let bounds = self.redriver.bounds();
        let redriver = self.redriver;

        let provider = match surface.deceleration() {
            Ok(provider) => provider,
            Err(err) if err.is_degradable() => {
                self.lookup = ProviderLookup {
                    resolved: true,
                    available: false,
                };
                awarn!(
                    error = %err,
                    "in-flight flings will snap back after content shifts"
                );
                return Ok((None, true));
            }
            Err(err) => return Err(AnchorError::AccessDenied(err)),
        };
        self.lookup = ProviderLookup {
            resolved: true,
            available: true,
        };

        let snapshot = provider.snapshot();
        if !snapshot.is_running {
            return Ok((None, false));
        }

        let direction = snapshot.direction();
        provider.cancel();
        let handle = redriver.rederive(
            provider,
            direction,
            snapshot.current_velocity.abs(),
            start,
            bounds,
            overscroll,
        );
        adebug!(
            ?direction,
            velocity = snapshot.current_velocity,
            start = start.main,
            "ScrollAnchorCorrector: fling re-driven"
        );
        Ok((handle, false))
    }
}
