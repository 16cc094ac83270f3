//! Static angular point index: counting-sorted point arena + prefix-sum table.
//!
//! Points are binned once, at construction, into the cells of a target
//! subdivision level. Because the cell scheme numbers descendants
//! contiguously (see [`CellAddressing`]), every query at a coarser level
//! reduces to two prefix-sum lookups and is O(1). The structure is immutable
//! after construction; all queries are pure reads and safe to issue from any
//! number of threads without synchronization.

use crate::cells::{CellAddressing, DyadicCells};

/// Build-once index over points keyed by angular position.
///
/// Storage layout (two flat arrays):
/// - `prefix_sums`: `num_cells_in_level(target_level) + 1` entries,
///   exclusive prefix sums of per-cell point counts. `prefix_sums[i]` is the
///   number of points in finest-level cells `j < i`; the last entry is the
///   total point count.
/// - `points`: all payloads, grouped by finest-level cell id. The block for
///   local cell `i` occupies `points[prefix_sums[i]..prefix_sums[i + 1]]`.
///
/// `r_min`/`r_max` describe the radial band the index covers. They are
/// carried for the caller's use only and never enter query arithmetic.
///
/// Query methods take **global** cell ids (see [`CellAddressing`]) and any
/// level from 0 to `target_level`. Precondition violations panic.
#[derive(Clone, Debug)]
pub struct AngularIndex<P, C: CellAddressing = DyadicCells> {
    /// Cell addressing scheme shared with the caller
    pub(crate) cells: C,
    /// Lower radial bound of the band (opaque metadata)
    pub(crate) r_min: f64,
    /// Upper radial bound of the band (opaque metadata)
    pub(crate) r_max: f64,
    /// Finest level points were binned at
    pub(crate) target_level: u32,
    /// Exclusive prefix sums over finest-level cell counts, length cells + 1
    pub(crate) prefix_sums: Vec<usize>,
    /// Payloads grouped by finest-level cell
    pub(crate) points: Vec<P>,
}

impl<P: Clone> AngularIndex<P, DyadicCells> {
    /// Builds an index over the dyadic subdivision of the circle.
    ///
    /// `nodes` selects which entries of the `angles` and `payloads` lookups
    /// participate; both lookups are indexed by node id. See
    /// [`with_scheme`](Self::with_scheme).
    ///
    /// # Panics
    ///
    /// Panics if a node id is out of range for `angles` or `payloads`, or if
    /// an angle falls outside `[0, 2π)` and therefore maps outside the cell
    /// table.
    pub fn new(
        r_min: f64,
        r_max: f64,
        target_level: u32,
        nodes: &[usize],
        angles: &[f64],
        payloads: &[P],
    ) -> Self {
        Self::with_scheme(DyadicCells, r_min, r_max, target_level, nodes, angles, payloads)
    }
}

impl<P: Clone, C: CellAddressing> AngularIndex<P, C> {
    /// Builds an index under an arbitrary addressing scheme.
    ///
    /// Construction is a counting sort in three linear passes: a histogram
    /// of finest-level cell occupancy, an in-place exclusive prefix sum, and
    /// a scatter of the payloads into their cell blocks. O(n + C) time and
    /// space for n points and C finest-level cells.
    ///
    /// # Panics
    ///
    /// Panics if a node id is out of range for `angles` or `payloads`, or if
    /// the scheme maps some angle to a cell at or beyond
    /// `num_cells_in_level(target_level)` — both indicate a mismatched
    /// oracle/input pairing, not a recoverable condition.
    pub fn with_scheme(
        cells: C,
        r_min: f64,
        r_max: f64,
        target_level: u32,
        nodes: &[usize],
        angles: &[f64],
        payloads: &[P],
    ) -> Self {
        let num_cells = cells.num_cells_in_level(target_level) as usize;

        // Histogram pass. The table has one extra slot so the prefix-sum
        // pass below leaves the total count in the last entry.
        let mut prefix_sums = vec![0usize; num_cells + 1];
        let mut node_cells = Vec::with_capacity(nodes.len());
        for &node in nodes {
            let cell = cells.cell_for_point(angles[node], target_level) as usize;
            assert!(
                cell < num_cells,
                "angle {} of node {node} maps to cell {cell}, outside the {num_cells} cells of level {target_level}",
                angles[node]
            );
            prefix_sums[cell] += 1;
            node_cells.push(cell);
        }

        // Exclusive prefix sums, in place.
        let mut sum = 0usize;
        for val in &mut prefix_sums {
            let tmp = *val;
            *val = sum;
            sum += tmp;
        }

        // Scatter pass: place each node behind its cell's write cursor,
        // then materialize the payloads in that order.
        let mut cursor = vec![0usize; num_cells];
        let mut order = vec![0usize; nodes.len()];
        for (&node, &cell) in nodes.iter().zip(&node_cells) {
            order[prefix_sums[cell] + cursor[cell]] = node;
            cursor[cell] += 1;
        }
        let points = order.iter().map(|&node| payloads[node].clone()).collect();

        let index = Self { cells, r_min, r_max, target_level, prefix_sums, points };
        #[cfg(debug_assertions)]
        index.spot_check_hierarchy(nodes, angles);
        index
    }

    /// Spot-checks the scheme's hierarchy contract on a few input points:
    /// the coarse cell of an angle must be its fine cell divided by the
    /// number of descendants. Debug builds only; not a full validation.
    #[cfg(debug_assertions)]
    fn spot_check_hierarchy(&self, nodes: &[usize], angles: &[f64]) {
        for &node in nodes.iter().take(8) {
            let fine = self.cells.cell_for_point(angles[node], self.target_level);
            for level in 0..=self.target_level {
                let descendants = self.cells.num_cells_in_level(self.target_level - level);
                debug_assert_eq!(
                    fine / descendants,
                    self.cells.cell_for_point(angles[node], level),
                    "cell scheme violates the contiguous-descendant contract at level {level}"
                );
            }
        }
    }
}

impl<P, C: CellAddressing> AngularIndex<P, C> {
    /// Lower radial bound of the band this index covers.
    #[inline]
    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    /// Upper radial bound of the band this index covers.
    #[inline]
    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    /// Finest subdivision level materialized by this index. Queries accept
    /// any level from 0 to this value.
    #[inline]
    pub fn target_level(&self) -> u32 {
        self.target_level
    }

    /// Returns the number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the index holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points under `cell` (a global id at `level`), counting
    /// every finest-level descendant. Zero is a valid result.
    ///
    /// # Panics
    ///
    /// Panics if `level > target_level` or `cell` does not belong to
    /// `level`.
    pub fn points_in_cell(&self, cell: u32, level: u32) -> usize {
        let (begin, end) = self.descendant_range(cell, level);
        self.prefix_sums[end] - self.prefix_sums[begin]
    }

    /// The `k`-th point under `cell` at `level`, in the index's internal
    /// cell-grouped order.
    ///
    /// # Panics
    ///
    /// Panics if the cell/level pair is invalid or
    /// `k >= points_in_cell(cell, level)`.
    pub fn kth_point(&self, cell: u32, level: u32, k: usize) -> &P {
        let block = self.cell_points(cell, level);
        assert!(
            k < block.len(),
            "k = {k} out of range for cell {cell} at level {level} ({} points)",
            block.len()
        );
        &block[k]
    }

    /// The contiguous block of all points under `cell` at `level`.
    ///
    /// The returned slice borrows the index's arena and stays valid (and
    /// unchanged) for the index's whole lifetime, so callers can iterate
    /// a subtree without per-element index translation.
    ///
    /// # Panics
    ///
    /// Panics if `level > target_level` or `cell` does not belong to
    /// `level`.
    pub fn cell_points(&self, cell: u32, level: u32) -> &[P] {
        let (begin, end) = self.descendant_range(cell, level);
        &self.points[self.prefix_sums[begin]..self.prefix_sums[end]]
    }

    /// Unchecked variant of [`kth_point`](Self::kth_point).
    ///
    /// # Safety
    ///
    /// The caller must guarantee `level <= target_level`, that `cell` is a
    /// global id belonging to `level`, and `k < points_in_cell(cell,
    /// level)`. Violations read out of bounds. Preconditions are still
    /// `debug_assert!`ed.
    #[inline]
    pub unsafe fn kth_point_unchecked(&self, cell: u32, level: u32, k: usize) -> &P {
        debug_assert!(k < self.points_in_cell(cell, level), "k = {k} out of range");
        let begin = self.first_descendant(cell, level);
        unsafe { self.points.get_unchecked(self.prefix_sums.get_unchecked(begin) + k) }
    }

    /// Unchecked variant of [`cell_points`](Self::cell_points).
    ///
    /// # Safety
    ///
    /// The caller must guarantee `level <= target_level` and that `cell` is
    /// a global id belonging to `level`. Violations read out of bounds.
    #[inline]
    pub unsafe fn cell_points_unchecked(&self, cell: u32, level: u32) -> &[P] {
        debug_assert!(level <= self.target_level, "level {level} exceeds target level");
        let descendants = self.cells.num_cells_in_level(self.target_level - level) as usize;
        let begin = self.first_descendant(cell, level);
        unsafe {
            let lo = *self.prefix_sums.get_unchecked(begin);
            let hi = *self.prefix_sums.get_unchecked(begin + descendants);
            self.points.get_unchecked(lo..hi)
        }
    }

    // --- Private helpers ---

    /// Local id, at the finest level, of the first descendant of `cell`.
    /// No validation; query arithmetic only.
    #[inline]
    fn first_descendant(&self, cell: u32, level: u32) -> usize {
        let descendants = self.cells.num_cells_in_level(self.target_level - level) as usize;
        let local = (cell - self.cells.first_cell_of_level(level)) as usize;
        local * descendants
    }

    /// Validates the cell/level pair and maps it to the half-open range of
    /// finest-level local ids covered by `cell`'s subtree. Both bounds are
    /// valid positions in `prefix_sums`.
    #[inline]
    fn descendant_range(&self, cell: u32, level: u32) -> (usize, usize) {
        assert!(
            level <= self.target_level,
            "level {level} exceeds target level {}",
            self.target_level
        );
        let first = self.cells.first_cell_of_level(level);
        assert!(
            first <= cell && cell - first < self.cells.num_cells_in_level(level),
            "cell {cell} does not belong to level {level}"
        );
        let descendants = self.cells.num_cells_in_level(self.target_level - level) as usize;
        let begin = (cell - first) as usize * descendants;
        (begin, begin + descendants)
    }
}
