use bidiscroll::{CorrectorOptions, Result, ScrollAnchorCorrector, ScrollSurface, ShiftOutcome};

use crate::SimulatedSurface;

/// A scroll view that stays anchored when content is inserted above the viewport.
///
/// This type composes a host surface with a [`ScrollAnchorCorrector`] and exposes the two
/// properties a layout system sets after it detects a shift:
/// - `set_shift_height` records how much the content grew or shrank (informational)
/// - `set_shift_offset` records how far the anchor moved and corrects immediately
///
/// Adapters must also forward every layout pass to `on_layout_change`.
#[derive(Clone, Debug, Default)]
pub struct BidirectionalScrollView<S = SimulatedSurface> {
    surface: S,
    corrector: ScrollAnchorCorrector,
}

impl<S: ScrollSurface> BidirectionalScrollView<S> {
    pub fn new(surface: S, options: CorrectorOptions) -> Self {
        Self {
            surface,
            corrector: ScrollAnchorCorrector::new(options),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn corrector(&self) -> &ScrollAnchorCorrector {
        &self.corrector
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn scroll_offset(&self) -> f64 {
        self.surface.scroll_offset()
    }

    pub fn set_shift_height(&mut self, shift_height: f64) {
        self.corrector.set_shift_height(shift_height);
    }

    pub fn set_shift_offset(&mut self, shift_offset: f64) -> Result<ShiftOutcome> {
        self.corrector
            .set_shift_offset(&mut self.surface, shift_offset)
    }

    /// Queues an offset shift for the next layout pass.
    pub fn record_shift(&mut self, shift_offset: f64) {
        self.corrector.record_shift(shift_offset);
    }

    pub fn on_layout_change(&mut self) -> Result<ShiftOutcome> {
        self.corrector.on_layout_change(&mut self.surface)
    }
}

impl BidirectionalScrollView<SimulatedSurface> {
    /// Draws the next frame of the simulated surface, if one is due.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        self.surface.frame(now_ms)
    }
}
