use bidiscroll::{
    AnimationHandle, AnimationSnapshotProvider, Bounds, DecelerationSnapshot, FlingRequest,
};

/// Physics for [`Scroller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollerOptions {
    /// Constant deceleration in pixels per second squared.
    pub deceleration: f64,
    /// Flings slower than this end immediately.
    pub min_velocity: f64,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            deceleration: 2000.0,
            min_velocity: 1.0,
        }
    }
}

impl ScrollerOptions {
    pub fn with_deceleration(mut self, deceleration: f64) -> Self {
        self.deceleration = if deceleration > 0.0 { deceleration } else { 1.0 };
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity.max(0.0);
        self
    }
}

/// A constant-deceleration fling along the primary axis.
///
/// The scroller is clock-driven: [`Scroller::advance`] moves it to a frame time, and
/// snapshots and new flings use the last time it was advanced to.
#[derive(Clone, Debug, PartialEq)]
pub struct Scroller {
    options: ScrollerOptions,
    now_ms: u64,
    start_ms: u64,
    start: f64,
    velocity: f64,
    /// Where the fling stops, inside bounds widened by overscroll.
    target: f64,
    /// Where it comes to rest once overscroll springs back.
    rest: f64,
    duration_ms: f64,
    position: f64,
    finished: bool,
    handle: u64,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(ScrollerOptions::default())
    }
}

impl Scroller {
    pub fn new(options: ScrollerOptions) -> Self {
        Self {
            options,
            now_ms: 0,
            start_ms: 0,
            start: 0.0,
            velocity: 0.0,
            target: 0.0,
            rest: 0.0,
            duration_ms: 0.0,
            position: 0.0,
            finished: true,
            handle: 0,
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Handle of the most recent fling.
    pub fn handle(&self) -> Option<AnimationHandle> {
        (self.handle > 0).then_some(AnimationHandle(self.handle))
    }

    pub fn final_position(&self) -> f64 {
        self.rest
    }

    /// Directed velocity at the last advanced time.
    pub fn velocity(&self) -> f64 {
        if self.finished {
            return 0.0;
        }
        let t = self.elapsed_secs();
        let speed = (self.velocity.abs() - self.options.deceleration * t).max(0.0);
        speed.copysign(self.velocity)
    }

    /// Speed at the last advanced time.
    pub fn current_velocity(&self) -> f64 {
        self.velocity().abs()
    }

    /// Moves the clock to `now_ms` and updates the position.
    ///
    /// Returns `true` while the fling was running when called, including the step that
    /// finishes it.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        if self.finished {
            return false;
        }

        let elapsed_ms = self.now_ms.saturating_sub(self.start_ms) as f64;
        if elapsed_ms >= self.duration_ms {
            self.position = self.rest;
            self.finished = true;
            return true;
        }

        let t = elapsed_ms / 1000.0;
        let sign = self.velocity.signum();
        self.position =
            self.start + self.velocity * t - sign * 0.5 * self.options.deceleration * t * t;
        true
    }

    /// Starts a fling from `start` at the current clock.
    pub fn start_fling(
        &mut self,
        start: f64,
        velocity: f64,
        bounds: Bounds,
        overscroll: f64,
    ) -> AnimationHandle {
        self.handle += 1;
        self.start_ms = self.now_ms;
        self.start = start;
        self.position = start;
        self.velocity = velocity;

        let a = self.options.deceleration;
        let speed = velocity.abs();
        if speed < self.options.min_velocity || !speed.is_finite() {
            self.velocity = 0.0;
            self.target = start;
            self.rest = bounds.clamp(start);
            self.duration_ms = 0.0;
            self.finished = true;
            return AnimationHandle(self.handle);
        }

        let natural = start + velocity.signum() * speed * speed / (2.0 * a);
        let widened = bounds.widen(overscroll);
        // The target never lies behind `start`: a fling that begins past the widened edge it
        // is heading for stops where it starts.
        self.target = if widened.contains(start) {
            widened.clamp(natural)
        } else if velocity > 0.0 {
            natural.min(widened.max).max(start)
        } else {
            natural.max(widened.min).min(start)
        };
        self.rest = bounds.clamp(self.target);

        // Time to cover |target - start| under constant deceleration.
        let distance = (self.target - start).abs();
        let disc = (speed * speed - 2.0 * a * distance).max(0.0);
        self.duration_ms = (speed - disc.sqrt()) * 1000.0 / a;
        self.finished = false;
        AnimationHandle(self.handle)
    }

    fn elapsed_secs(&self) -> f64 {
        self.now_ms.saturating_sub(self.start_ms) as f64 / 1000.0
    }
}

impl AnimationSnapshotProvider for Scroller {
    fn snapshot(&self) -> DecelerationSnapshot {
        DecelerationSnapshot {
            is_running: !self.finished,
            start_offset: self.start,
            target_offset: self.target,
            current_velocity: self.current_velocity(),
        }
    }

    fn cancel(&mut self) {
        self.finished = true;
        self.velocity = 0.0;
    }

    fn fling(&mut self, request: FlingRequest) -> AnimationHandle {
        self.start_fling(
            request.start.main,
            request.velocity.main,
            request.bounds_main,
            request.overscroll.main,
        )
    }
}
