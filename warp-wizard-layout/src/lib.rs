//! Layout-generation core for warp-wizard.
//!
//! Pure, synchronous functions that turn a flat command selection into the
//! tab/pane tree of a launch configuration:
//!
//! - [`classify`] splits commands into one-off and long-running subsets
//! - [`chunk`] partitions an ordered sequence into fixed-size groups
//! - [`build`] arranges the classified commands into tabs and nested splits
//!
//! Nothing in this crate performs I/O or mutates its inputs; every function
//! is a deterministic mapping from arguments to result.

pub mod builder;
pub mod chunk;
pub mod classify;

pub use builder::{LayoutMode, build};
pub use chunk::chunk;
pub use classify::classify;
