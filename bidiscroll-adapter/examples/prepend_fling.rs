use bidiscroll::{Cell, CellContainer, CorrectorOptions, capture_cell_anchor, shift_since};
use bidiscroll_adapter::{BidirectionalScrollView, SimulatedSurface};
use tracing_subscriber::EnvFilter;

fn rows(prepended: usize) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut top = 0.0;
    for i in 0..prepended {
        cells.push(
            Cell::new(i as i64, format!("older-{i}")).with_frame(0.0, top, 360.0, top + 80.0),
        );
        top += 80.0;
    }
    for i in 0..50 {
        let index = (prepended + i) as i64;
        cells.push(Cell::new(index, format!("row-{i}")).with_frame(0.0, top, 360.0, top + 100.0));
        top += 100.0;
    }
    cells
}

fn extent(cells: &[Cell]) -> f64 {
    cells.iter().map(|c| c.bottom()).fold(0.0, f64::max)
}

fn main() {
    // Run with `--features tracing` and `RUST_LOG=bidiscroll=debug` to see corrections.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Example: a timeline loads older rows above the viewport while the user is flinging.
    //
    // The adapter flow is typically:
    // 1) capture which row is at the top of the viewport before layout
    // 2) lay out the new rows
    // 3) hand the anchor row's movement to the scroll view as a shift
    let mut view = BidirectionalScrollView::new(
        SimulatedSurface::default().with_offset(1500.0),
        CorrectorOptions::default(),
    );
    view.surface_mut().fling(-1200.0, 0);

    let mut now_ms = 0;
    for _ in 0..5 {
        now_ms += 16;
        view.frame(now_ms);
    }

    let before = rows(0);
    let anchor =
        capture_cell_anchor(&before, view.scroll_offset()).expect("the viewport must cover a row");
    println!(
        "before prepend: off={:.1} anchor={anchor:?}",
        view.scroll_offset()
    );

    let after = rows(10);
    let Some(shift) = shift_since(&anchor, &after, extent(&before), extent(&after)) else {
        return;
    };
    view.set_shift_height(shift.height_delta);
    match view.set_shift_offset(shift.offset_delta) {
        Ok(out) => println!(
            "after prepend: off={:.1} redriven={:?}",
            out.offset, out.redriven
        ),
        Err(err) => println!("correction failed: {err}"),
    }

    while view.frame(now_ms) {
        now_ms += 16;
    }
    println!("settled: off={:.1} at {now_ms}ms", view.scroll_offset());
}
