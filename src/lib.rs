//! # arcgrid - Static Angular Point Index
//!
//! A Rust library providing a build-once, query-many index over points
//! distributed by angular position, the layer structure used when sampling
//! hyperbolic random graphs band by band.
//!
//! ## Features
//!
//! - **Counting-Sort Construction**: histogram + prefix sum + scatter, three
//!   linear passes and no comparisons
//! - **O(1) Hierarchical Queries**: point counts, k-th point, and contiguous
//!   subtree slices for any cell at any level up to the build level
//! - **Immutable After Build**: pure-read queries, safe to share across
//!   threads with no locking
//! - **Pluggable Addressing**: the subdivision scheme is a trait; the dyadic
//!   (power-of-two) scheme ships with the crate
//!
//! ## Quick Start
//!
//! ```rust
//! use arcgrid::prelude::*;
//!
//! // Four points on the circle, identified by their position in the lookups.
//! let angles = [0.1, 2.0, 3.5, 5.0];
//! let names = ["a", "b", "c", "d"];
//! let nodes: Vec<usize> = (0..4).collect();
//!
//! // Bin them at level 2 (four quarter-circle cells) for the band [1.0, 2.0).
//! let index = AngularIndex::new(1.0, 2.0, 2, &nodes, &angles, &names);
//!
//! // Global cell ids at level 2 start at 3; each quarter holds one point.
//! assert_eq!(index.points_in_cell(3, 2), 1);
//! assert_eq!(*index.kth_point(3, 2, 0), "a");
//!
//! // The same index answers at coarser levels in O(1): cell 1 at level 1
//! // covers the first half-circle, so points "a" and "b".
//! assert_eq!(index.points_in_cell(1, 1), 2);
//! assert_eq!(index.cell_points(1, 1), &["a", "b"]);
//!
//! // The root cell covers everything.
//! assert_eq!(index.points_in_cell(0, 0), 4);
//! ```
//!
//! ## How It Works
//!
//! Construction counting-sorts the points by their cell at the target level
//! into one contiguous arena and keeps an exclusive prefix-sum table of
//! per-cell counts. The addressing scheme numbers each coarser cell's
//! descendants contiguously, so any (cell, level) pair maps to a range of
//! finest-level cells by one multiplication, and every query becomes two
//! prefix-sum lookups. No tree is materialized and no tree walk ever runs.

pub mod angular_index;
pub mod cells;
pub mod prelude;

pub use angular_index::AngularIndex;
pub use cells::{CellAddressing, DyadicCells};
