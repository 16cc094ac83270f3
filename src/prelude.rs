//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use arcgrid::prelude::*;
//! ```

pub use crate::AngularIndex;
pub use crate::CellAddressing;
pub use crate::DyadicCells;
