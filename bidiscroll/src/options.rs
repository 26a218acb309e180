/// The forward limit handed to replacement flings.
///
/// Some animation runtimes reject infinite bounds, so this stays finite.
pub const LARGE_FINITE: f64 = i32::MAX as f64;

/// Configuration for [`crate::ScrollAnchorCorrector`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectorOptions {
    /// Upper primary-axis bound of a re-driven fling.
    pub forward_limit: f64,
    /// Primary-axis overscroll of a re-driven fling, as a fraction of the scroll window extent.
    pub overscroll_ratio: f64,
    /// Whether a shift with no fling in flight still schedules a redraw.
    pub redraw_on_static_shift: bool,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            forward_limit: LARGE_FINITE,
            overscroll_ratio: 0.5,
            redraw_on_static_shift: true,
        }
    }
}

impl CorrectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite or negative limits fall back to [`LARGE_FINITE`].
    pub fn with_forward_limit(mut self, forward_limit: f64) -> Self {
        self.forward_limit = if forward_limit.is_finite() && forward_limit >= 0.0 {
            forward_limit
        } else {
            LARGE_FINITE
        };
        self
    }

    pub fn with_overscroll_ratio(mut self, overscroll_ratio: f64) -> Self {
        self.overscroll_ratio = overscroll_ratio.max(0.0);
        self
    }

    pub fn with_redraw_on_static_shift(mut self, redraw_on_static_shift: bool) -> Self {
        self.redraw_on_static_shift = redraw_on_static_shift;
        self
    }
}
