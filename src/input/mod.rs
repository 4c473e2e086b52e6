//! Input layer: where the three documents live and how they are read.
//!
//! Kept apart from the merge itself so the pipeline can be driven from
//! in-memory values in tests.

pub mod load;
pub mod paths;

pub use load::{load_layout, load_object};
pub use paths::InputPaths;
