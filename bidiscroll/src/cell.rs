use alloc::string::String;
use core::fmt;

use crate::PendingShift;

/// Identity and geometry of one rendered list item, as reported by the host.
///
/// Coordinates are in content space along the surface's axes: `top`/`bottom` run along the
/// primary axis.
pub trait CellContainer {
    fn index(&self) -> i64;
    fn set_index(&mut self, index: i64);
    fn stable_id(&self) -> &str;
    fn set_stable_id(&mut self, stable_id: String);

    fn left(&self) -> f64;
    fn set_left(&mut self, left: f64);
    fn top(&self) -> f64;
    fn set_top(&mut self, top: f64);
    fn right(&self) -> f64;
    fn set_right(&mut self, right: f64);
    fn bottom(&self) -> f64;
    fn set_bottom(&mut self, bottom: f64);

    fn width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    fn height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }
}

/// A plain [`CellContainer`]. A fresh cell has index `-1` and an empty stable id.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    index: i64,
    stable_id: String,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            index: -1,
            stable_id: String::new(),
            left: 0.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        }
    }
}

impl Cell {
    pub fn new(index: i64, stable_id: impl Into<String>) -> Self {
        Self {
            index,
            stable_id: stable_id.into(),
            ..Self::default()
        }
    }

    pub fn with_frame(mut self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
        self
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("index", &self.index)
            .field("stable_id", &self.stable_id)
            .field("top", &self.top)
            .field("bottom", &self.bottom)
            .finish_non_exhaustive()
    }
}

impl CellContainer for Cell {
    fn index(&self) -> i64 {
        self.index
    }

    fn set_index(&mut self, index: i64) {
        self.index = index;
    }

    fn stable_id(&self) -> &str {
        &self.stable_id
    }

    fn set_stable_id(&mut self, stable_id: String) {
        self.stable_id = stable_id;
    }

    fn left(&self) -> f64 {
        self.left
    }

    fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    fn top(&self) -> f64 {
        self.top
    }

    fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    fn right(&self) -> f64 {
        self.right
    }

    fn set_right(&mut self, right: f64) {
        self.right = right;
    }

    fn bottom(&self) -> f64 {
        self.bottom
    }

    fn set_bottom(&mut self, bottom: f64) {
        self.bottom = bottom;
    }
}

/// Where an identified cell sat before a layout pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAnchor {
    pub stable_id: String,
    pub top: f64,
}

/// Captures the top-most cell that is still visible at `scroll_offset`.
///
/// Returns `None` when no cell reaches past the offset.
pub fn capture_cell_anchor<C: CellContainer>(cells: &[C], scroll_offset: f64) -> Option<CellAnchor> {
    let cell = cells
        .iter()
        .filter(|c| c.bottom() > scroll_offset)
        .min_by(|a, b| a.top().total_cmp(&b.top()))?;
    Some(CellAnchor {
        stable_id: String::from(cell.stable_id()),
        top: cell.top(),
    })
}

/// Computes the shift that keeps `anchor` in place after a layout pass.
///
/// Returns `None` if the anchored cell is no longer laid out.
pub fn shift_since<C: CellContainer>(
    anchor: &CellAnchor,
    cells: &[C],
    old_extent: f64,
    new_extent: f64,
) -> Option<PendingShift> {
    let cell = cells.iter().find(|c| c.stable_id() == anchor.stable_id)?;
    Some(PendingShift::new(new_extent - old_extent, cell.top() - anchor.top))
}
