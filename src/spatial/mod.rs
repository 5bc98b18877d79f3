//! Spatial ordering helpers.

mod serpentine;

pub use serpentine::{bucket_index, serpentine_sort};
