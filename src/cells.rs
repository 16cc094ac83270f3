//! Hierarchical angular cell addressing.
//!
//! The index does not define its own subdivision of the circle; it consumes
//! an addressing scheme through the [`CellAddressing`] trait and relies on
//! the hierarchy contract documented there. [`DyadicCells`] is the scheme
//! used by the hyperbolic random-graph sampler: each cell splits into two
//! children on the next level.

use std::f64::consts::TAU;

/// Addressing contract for a fixed hierarchical subdivision of `[0, 2π)`.
///
/// Levels are numbered from 0 (coarsest, one region covering the full
/// circle for the dyadic scheme) upward. Two id spaces are in play:
///
/// - **Local** ids number the cells of one level `0..num_cells_in_level(l)`.
///   [`cell_for_point`](CellAddressing::cell_for_point) returns local ids.
/// - **Global** ids number all cells of all levels in level order; the
///   global id of a cell is its local id plus
///   [`first_cell_of_level`](CellAddressing::first_cell_of_level) of its
///   level. Query methods on the index take global ids.
///
/// # Hierarchy contract
///
/// Implementations must number cells so that for any pair of levels
/// `L <= T`, the descendants at level `T` of a cell with local id `c` at
/// level `L` are exactly the contiguous local range
/// `c * num_cells_in_level(T - L) .. (c + 1) * num_cells_in_level(T - L)`.
/// Equivalently, `cell_for_point(a, T) / num_cells_in_level(T - L)` must
/// equal `cell_for_point(a, L)` for every angle `a`. The index derives every
/// query from this relation in O(1) and cannot verify it cheaply; a
/// violation produces wrong answers, not panics (a debug build spot-checks
/// a few points after construction).
pub trait CellAddressing {
    /// Number of cells at `level`; strictly increasing in `level`.
    fn num_cells_in_level(&self, level: u32) -> u32;

    /// Global id of the first cell of `level`.
    fn first_cell_of_level(&self, level: u32) -> u32;

    /// Local id (within `level`) of the cell containing `angle`.
    ///
    /// `angle` is expected in the scheme's normalized range; for
    /// [`DyadicCells`] that is `[0, 2π)`.
    fn cell_for_point(&self, angle: f64, level: u32) -> u32;
}

/// Binary subdivision of the circle: level `l` has `2^l` equal arcs.
///
/// Global ids form the usual implicit-binary-tree numbering, so
/// `first_cell_of_level(l) == 2^l - 1`. Supports levels up to 31.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DyadicCells;

impl CellAddressing for DyadicCells {
    #[inline]
    fn num_cells_in_level(&self, level: u32) -> u32 {
        debug_assert!(level < 32, "dyadic level {level} out of range");
        1u32 << level
    }

    #[inline]
    fn first_cell_of_level(&self, level: u32) -> u32 {
        debug_assert!(level < 32, "dyadic level {level} out of range");
        (1u32 << level) - 1
    }

    #[inline]
    fn cell_for_point(&self, angle: f64, level: u32) -> u32 {
        (angle / TAU * f64::from(self.num_cells_in_level(level))) as u32
    }
}
