use crate::*;

use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Cancel,
    Fling(FlingRequest),
}

#[derive(Debug, Default)]
struct FakeFling {
    snapshot: DecelerationSnapshot,
    calls: Vec<Call>,
    next_handle: u64,
}

impl AnimationSnapshotProvider for FakeFling {
    fn snapshot(&self) -> DecelerationSnapshot {
        self.snapshot
    }

    fn cancel(&mut self) {
        self.snapshot.is_running = false;
        self.calls.push(Call::Cancel);
    }

    fn fling(&mut self, request: FlingRequest) -> AnimationHandle {
        self.next_handle += 1;
        self.snapshot = DecelerationSnapshot {
            is_running: true,
            start_offset: request.start.main,
            target_offset: request.start.main + request.velocity.main,
            current_velocity: request.velocity.main.abs(),
        };
        self.calls.push(Call::Fling(request));
        AnimationHandle(self.next_handle)
    }
}

#[derive(Debug)]
struct FakeSurface {
    offset: f64,
    extent: f64,
    padding: Padding,
    redraws: usize,
    probes: usize,
    fling: Result<FakeFling, CapabilityError>,
}

impl FakeSurface {
    fn new(offset: f64) -> Self {
        Self {
            offset,
            extent: 800.0,
            padding: Padding::default(),
            redraws: 0,
            probes: 0,
            fling: Ok(FakeFling::default()),
        }
    }

    fn flinging(offset: f64, direction: Direction, velocity: f64) -> Self {
        let mut s = Self::new(offset);
        let travel = direction.sign() * 1000.0;
        s.fling = Ok(FakeFling {
            snapshot: DecelerationSnapshot {
                is_running: true,
                start_offset: offset - travel / 2.0,
                target_offset: offset + travel / 2.0,
                current_velocity: velocity,
            },
            ..FakeFling::default()
        });
        s
    }

    fn without_fling(offset: f64, err: CapabilityError) -> Self {
        let mut s = Self::new(offset);
        s.fling = Err(err);
        s
    }

    fn calls(&self) -> &[Call] {
        match &self.fling {
            Ok(f) => f.calls.as_slice(),
            Err(_) => &[],
        }
    }

    fn flings(&self) -> Vec<FlingRequest> {
        self.calls()
            .iter()
            .filter_map(|c| match c {
                Call::Fling(r) => Some(*r),
                Call::Cancel => None,
            })
            .collect()
    }
}

impl ScrollSurface for FakeSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn viewport_extent(&self) -> f64 {
        self.extent
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn deceleration(
        &mut self,
    ) -> core::result::Result<&mut dyn AnimationSnapshotProvider, CapabilityError> {
        self.probes += 1;
        match &mut self.fling {
            Ok(f) => Ok(f),
            Err(err) => Err(*err),
        }
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn static_shift_moves_offset_and_requests_redraw() {
    let mut s = FakeSurface::new(100.0);
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 50.0).unwrap();

    assert_eq!(s.offset, 150.0);
    assert_eq!(out.offset, 150.0);
    assert_eq!(out.applied_delta, 50.0);
    assert_eq!(out.redriven, None);
    assert!(!out.degraded);
    assert!(s.flings().is_empty());
    assert_eq!(s.redraws, 1);
    assert_eq!(c.phase(), CorrectorPhase::Idle);
    assert_eq!(c.pending(), PendingShift::default());
}

#[test]
fn zero_shift_touches_nothing() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    let before = s.fling.as_ref().unwrap().snapshot;
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 0.0).unwrap();

    assert!(out.is_noop());
    assert_eq!(out.offset, 100.0);
    assert_eq!(s.offset, 100.0);
    assert_eq!(s.redraws, 0);
    assert_eq!(s.probes, 0);
    assert!(s.calls().is_empty());
    assert_eq!(s.fling.as_ref().unwrap().snapshot, before);
}

#[test]
fn offset_continuity_holds_for_many_deltas() {
    let mut c = ScrollAnchorCorrector::default();
    for delta in [-250.5, -30.0, -0.25, 0.125, 1.0, 17.0, 4096.75] {
        let mut s = FakeSurface::new(1000.0);
        c.notify_shift(&mut s, delta).unwrap();
        assert_eq!(s.offset, 1000.0 + delta);
    }
}

#[test]
fn backward_shift_redrives_forward_fling() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, -30.0).unwrap();

    assert_eq!(s.offset, 70.0);
    assert!(out.redriven.is_some());
    assert_eq!(s.calls().first(), Some(&Call::Cancel));

    let flings = s.flings();
    assert_eq!(flings.len(), 1);
    let r = flings[0];
    assert_eq!(r.start.main, 70.0);
    assert!(approx(r.velocity.main, 800.0));
    assert_eq!(r.bounds_main, Bounds::new(0.0, LARGE_FINITE));
    assert_eq!(r.bounds_cross, Bounds::ZERO);
    assert_eq!(r.velocity.cross, 0.0);
    assert_eq!(s.redraws, 1);
}

#[test]
fn forward_shift_keeps_backward_fling_backward() {
    let mut s = FakeSurface::flinging(100.0, Direction::Backward, 500.0);
    let mut c = ScrollAnchorCorrector::default();

    c.notify_shift(&mut s, 20.0).unwrap();

    let r = s.flings()[0];
    assert_eq!(r.start.main, 120.0);
    assert!(approx(r.velocity.main, -500.0));
}

#[test]
fn replacement_fling_starts_at_the_replaced_velocity() {
    let mut s = FakeSurface::flinging(400.0, Direction::Forward, 1234.5);
    let mut c = ScrollAnchorCorrector::default();

    c.notify_shift(&mut s, -100.0).unwrap();

    let after = s.fling.as_ref().unwrap().snapshot;
    assert!(after.is_running);
    assert_eq!(after.start_offset, 300.0);
    assert!(approx(after.directed_velocity(), 1234.5));
}

#[test]
fn overscroll_is_half_the_padded_window() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    s.extent = 700.0;
    s.padding = Padding {
        start: 50.0,
        end: 50.0,
    };
    let mut c = ScrollAnchorCorrector::default();

    c.notify_shift(&mut s, 10.0).unwrap();

    let r = s.flings()[0];
    assert_eq!(r.overscroll, Point::new(300.0, 0.0));
}

#[test]
fn finished_fling_is_not_redriven() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    if let Ok(f) = &mut s.fling {
        f.snapshot.is_running = false;
    }
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 25.0).unwrap();

    assert_eq!(s.offset, 125.0);
    assert_eq!(out.redriven, None);
    assert!(s.calls().is_empty());
    assert_eq!(s.redraws, 1);
}

#[test]
fn zero_velocity_fling_is_cancelled_but_not_restarted() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 0.0);
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 25.0).unwrap();

    assert_eq!(out.redriven, None);
    assert_eq!(s.calls(), &[Call::Cancel]);
}

#[test]
fn missing_fling_degrades_once() {
    let mut s = FakeSurface::without_fling(100.0, CapabilityError::Unavailable);
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 50.0).unwrap();
    assert_eq!(s.offset, 150.0);
    assert!(out.degraded);
    assert!(c.is_degraded());

    let out = c.notify_shift(&mut s, -20.0).unwrap();
    assert_eq!(s.offset, 130.0);
    assert!(out.degraded);
    assert_eq!(s.probes, 1);
    assert_eq!(s.redraws, 2);
}

#[test]
fn unexpected_shape_degrades_like_missing() {
    let mut s = FakeSurface::without_fling(
        100.0,
        CapabilityError::UnexpectedShape {
            found: "vendor scroller",
        },
    );
    let mut c = ScrollAnchorCorrector::default();

    let out = c.notify_shift(&mut s, 5.0).unwrap();

    assert_eq!(s.offset, 105.0);
    assert!(out.degraded);
}

#[test]
fn access_denied_fails_after_correcting() {
    let denied = CapabilityError::AccessDenied {
        reason: "sealed field",
    };
    let mut s = FakeSurface::without_fling(100.0, denied);
    let mut c = ScrollAnchorCorrector::default();

    let err = c.notify_shift(&mut s, 50.0).unwrap_err();

    assert_eq!(err, AnchorError::AccessDenied(denied));
    assert_eq!(s.offset, 150.0);
    assert_eq!(s.redraws, 1);
    assert_eq!(c.phase(), CorrectorPhase::Idle);
    assert_eq!(c.pending(), PendingShift::default());
    assert!(!c.is_degraded());
    assert!(!denied.is_degradable());
}

#[test]
fn shift_height_alone_does_not_move() {
    let mut s = FakeSurface::new(100.0);
    let mut c = ScrollAnchorCorrector::default();

    c.set_shift_height(40.0);
    assert_eq!(c.pending().height_delta, 40.0);
    let out = c.on_layout_change(&mut s).unwrap();

    assert!(out.is_noop());
    assert_eq!(s.offset, 100.0);
    assert_eq!(s.redraws, 0);
    assert_eq!(c.pending(), PendingShift::default());
}

#[test]
fn layout_change_after_setter_is_a_noop() {
    let mut s = FakeSurface::new(100.0);
    let mut c = ScrollAnchorCorrector::default();

    c.set_shift_height(40.0);
    c.set_shift_offset(&mut s, 40.0).unwrap();
    c.on_layout_change(&mut s).unwrap();

    assert_eq!(s.offset, 140.0);
    assert_eq!(s.redraws, 1);
}

#[test]
fn recorded_shifts_apply_together_on_layout() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    let mut c = ScrollAnchorCorrector::default();

    c.record_shift(30.0);
    c.record_shift(20.0);
    assert_eq!(c.pending().offset_delta, 50.0);
    assert_eq!(s.offset, 100.0);
    assert_eq!(s.probes, 0);

    let out = c.on_layout_change(&mut s).unwrap();

    assert_eq!(out.applied_delta, 50.0);
    assert_eq!(s.offset, 150.0);
    assert_eq!(s.redraws, 1);
    assert_eq!(s.flings().len(), 1);
    assert_eq!(s.flings()[0].start.main, 150.0);
    assert_eq!(c.pending(), PendingShift::default());
}

#[test]
fn non_finite_shift_is_ignored() {
    let mut s = FakeSurface::flinging(100.0, Direction::Forward, 800.0);
    let before = s.fling.as_ref().unwrap().snapshot;
    let mut c = ScrollAnchorCorrector::default();

    for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let out = c.notify_shift(&mut s, delta).unwrap();
        assert!(out.is_noop());
        assert_eq!(out.offset, 100.0);
    }
    assert_eq!(s.offset, 100.0);
    assert_eq!(s.redraws, 0);
    assert_eq!(s.probes, 0);
    assert!(s.calls().is_empty());
    assert_eq!(s.fling.as_ref().unwrap().snapshot, before);

    // A bad value queued ahead of a good one does not swallow it.
    c.record_shift(f64::NAN);
    c.notify_shift(&mut s, 10.0).unwrap();
    assert_eq!(s.offset, 110.0);
}

#[test]
fn bounds_contain_their_ends() {
    let b = Bounds::new(-10.0, 10.0);
    assert!(b.contains(-10.0));
    assert!(b.contains(10.0));
    assert!(!b.contains(10.5));
    assert!(!b.contains(f64::NAN));
    assert!(b.widen(5.0).contains(-15.0));
    assert!(!b.widen(-5.0).contains(-15.0));
}

#[test]
fn static_redraw_can_be_disabled() {
    let mut s = FakeSurface::new(100.0);
    let mut c =
        ScrollAnchorCorrector::new(CorrectorOptions::new().with_redraw_on_static_shift(false));

    c.notify_shift(&mut s, 10.0).unwrap();

    assert_eq!(s.offset, 110.0);
    assert_eq!(s.redraws, 0);
}

#[test]
fn forward_limit_stays_finite() {
    let o = CorrectorOptions::new().with_forward_limit(f64::INFINITY);
    assert_eq!(o.forward_limit, LARGE_FINITE);
    let o = CorrectorOptions::new().with_forward_limit(5000.0);
    assert_eq!(o.forward_limit, 5000.0);
}

#[test]
fn redriver_zeroes_cross_axis() {
    let r = DecelerationRedriver::default();
    let bounds = FlingBounds {
        main: Bounds::new(0.0, 10_000.0),
        cross: Bounds::new(-50.0, 50.0),
    };
    let req = r
        .plan(Direction::Backward, -300.0, Point::new(10.0, 7.0), bounds, 20.0)
        .unwrap();

    assert_eq!(req.velocity, Point::new(-300.0, 0.0));
    assert_eq!(req.bounds_cross, Bounds::ZERO);
    assert_eq!(req.overscroll.cross, 0.0);
    assert_eq!(req.start, Point::new(10.0, 7.0));

    assert!(
        r.plan(Direction::Forward, 0.0, Point::ZERO, bounds, 0.0)
            .is_none()
    );
}

#[test]
fn fling_request_maps_to_platform_order() {
    let req = FlingRequest {
        start: Point::new(120.0, 3.0),
        velocity: Point::new(-500.0, 0.0),
        bounds_main: Bounds::new(0.0, LARGE_FINITE),
        bounds_cross: Bounds::ZERO,
        overscroll: Point::new(400.0, 0.0),
    };

    let v = req.to_xy(Axis::Vertical);
    assert_eq!((v.start_x, v.start_y), (3.0, 120.0));
    assert_eq!((v.velocity_x, v.velocity_y), (0.0, -500.0));
    assert_eq!(v.bounds_y.max, LARGE_FINITE);
    assert_eq!(v.overscroll_y, 400.0);

    let h = req.to_xy(Axis::Horizontal);
    assert_eq!(h.start_x, 120.0);
    assert_eq!(h.bounds_y, Bounds::ZERO);
}

#[test]
fn direction_comes_from_travel() {
    assert_eq!(Direction::from_travel(0.0, 10.0), Direction::Forward);
    assert_eq!(Direction::from_travel(10.0, 0.0), Direction::Backward);
    assert_eq!(Direction::from_travel(5.0, 5.0), Direction::Backward);
}

fn cells() -> Vec<Cell> {
    (0..5)
        .map(|i| {
            let top = i as f64 * 100.0;
            Cell::new(i, alloc::format!("row-{i}")).with_frame(0.0, top, 320.0, top + 100.0)
        })
        .collect()
}

#[test]
fn cell_anchor_tracks_prepend() {
    let before = cells();
    let anchor = capture_cell_anchor(&before, 150.0).unwrap();
    assert_eq!(anchor.stable_id, "row-1");
    assert_eq!(anchor.top, 100.0);

    // Two 60px rows land above everything.
    let mut after = cells();
    for c in after.iter_mut() {
        c.set_index(c.index() + 2);
        c.set_top(c.top() + 120.0);
        c.set_bottom(c.bottom() + 120.0);
    }
    after.insert(0, Cell::new(0, "new-0").with_frame(0.0, 0.0, 320.0, 60.0));
    after.insert(1, Cell::new(1, "new-1").with_frame(0.0, 60.0, 320.0, 120.0));

    let shift = shift_since(&anchor, &after, 500.0, 620.0).unwrap();
    assert_eq!(shift, PendingShift::new(120.0, 120.0));

    let mut s = FakeSurface::new(150.0);
    let mut c = ScrollAnchorCorrector::default();
    c.set_shift_height(shift.height_delta);
    c.set_shift_offset(&mut s, shift.offset_delta).unwrap();
    assert_eq!(s.offset, 270.0);
}

#[test]
fn cell_anchor_lost_when_cell_is_gone() {
    let anchor = CellAnchor {
        stable_id: String::from("gone"),
        top: 0.0,
    };
    assert!(shift_since(&anchor, &cells(), 0.0, 0.0).is_none());
    assert!(capture_cell_anchor(&cells(), 10_000.0).is_none());
}

#[test]
fn cell_defaults_and_geometry() {
    let c = Cell::default();
    assert_eq!(c.index(), -1);
    assert_eq!(c.stable_id(), "");

    let mut c = Cell::new(3, "a").with_frame(10.0, 20.0, 110.0, 70.0);
    assert_eq!(c.width(), 100.0);
    assert_eq!(c.height(), 50.0);
    c.set_stable_id(String::from("b"));
    c.set_left(0.0);
    c.set_right(5.0);
    assert_eq!(c.stable_id(), "b");
    assert_eq!(c.width(), 5.0);
}
