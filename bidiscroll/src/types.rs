/// The axis a scroll surface animates along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Splits a `(main, cross)` pair into platform `(x, y)` order.
    pub fn to_xy<T>(self, main: T, cross: T) -> (T, T) {
        match self {
            Self::Vertical => (cross, main),
            Self::Horizontal => (main, cross),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Derives the direction of travel from an animation's start and target.
    ///
    /// Only a strictly positive travel counts as forward; a zero-length animation reads as
    /// backward.
    pub fn from_travel(start: f64, target: f64) -> Self {
        if target - start > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// A `(main, cross)` pair of scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub main: f64,
    pub cross: f64,
}

impl Point {
    pub const ZERO: Self = Self {
        main: 0.0,
        cross: 0.0,
    };

    pub fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }
}

/// Inclusive limits along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Returns the bounds widened by `amount` on both ends.
    pub fn widen(&self, amount: f64) -> Self {
        let amount = amount.max(0.0);
        Self {
            min: self.min - amount,
            max: self.max + amount,
        }
    }
}

/// Padding before and after the content along the primary axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub start: f64,
    pub end: f64,
}

/// A request to re-anchor after the content coordinate space moved.
///
/// `height_delta` is informational: only `offset_delta` moves the scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingShift {
    pub height_delta: f64,
    pub offset_delta: f64,
}

impl PendingShift {
    pub fn new(height_delta: f64, offset_delta: f64) -> Self {
        Self {
            height_delta,
            offset_delta,
        }
    }

    /// `true` when applying the shift would not move the offset.
    pub fn is_neutral(&self) -> bool {
        self.offset_delta == 0.0 || !self.offset_delta.is_finite()
    }

    /// Coalesces a later shift into this one.
    ///
    /// Non-finite deltas are dropped so one bad value cannot poison what is already queued.
    pub fn merge(&mut self, later: PendingShift) {
        if later.height_delta.is_finite() {
            self.height_delta += later.height_delta;
        }
        if later.offset_delta.is_finite() {
            self.offset_delta += later.offset_delta;
        }
    }
}

/// A read-only view of the host's in-flight deceleration animation.
///
/// `current_velocity` is a speed (magnitude); the direction is derived from
/// `start_offset` and `target_offset`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecelerationSnapshot {
    pub is_running: bool,
    pub start_offset: f64,
    pub target_offset: f64,
    pub current_velocity: f64,
}

impl DecelerationSnapshot {
    pub fn direction(&self) -> Direction {
        Direction::from_travel(self.start_offset, self.target_offset)
    }

    pub fn directed_velocity(&self) -> f64 {
        self.direction().sign() * self.current_velocity.abs()
    }
}

/// Parameters for starting a deceleration animation on the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingRequest {
    pub start: Point,
    pub velocity: Point,
    pub bounds_main: Bounds,
    pub bounds_cross: Bounds,
    pub overscroll: Point,
}

/// [`FlingRequest`] in platform order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlingXy {
    pub start_x: f64,
    pub start_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub bounds_x: Bounds,
    pub bounds_y: Bounds,
    pub overscroll_x: f64,
    pub overscroll_y: f64,
}

impl FlingRequest {
    pub fn to_xy(&self, axis: Axis) -> FlingXy {
        let (start_x, start_y) = axis.to_xy(self.start.main, self.start.cross);
        let (velocity_x, velocity_y) = axis.to_xy(self.velocity.main, self.velocity.cross);
        let (bounds_x, bounds_y) = axis.to_xy(self.bounds_main, self.bounds_cross);
        let (overscroll_x, overscroll_y) = axis.to_xy(self.overscroll.main, self.overscroll.cross);
        FlingXy {
            start_x,
            start_y,
            velocity_x,
            velocity_y,
            bounds_x,
            bounds_y,
            overscroll_x,
            overscroll_y,
        }
    }
}

/// Identifies an animation started by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationHandle(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectorPhase {
    #[default]
    Idle,
    Correcting,
}

/// What a correction cycle did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftOutcome {
    pub applied_delta: f64,
    /// Scroll offset after the correction.
    pub offset: f64,
    pub redriven: Option<AnimationHandle>,
    /// The fling could not be inspected, so it was left alone.
    pub degraded: bool,
}

impl ShiftOutcome {
    pub fn is_noop(&self) -> bool {
        self.applied_delta == 0.0
    }
}
