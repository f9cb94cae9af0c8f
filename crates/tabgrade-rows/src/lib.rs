#![deny(missing_docs)]
#![doc = "Index column generation, per-row list broadcasting and row layout for tabgrade tables."]

/// Index sequence generation.
pub mod index;
/// Per-row lists and row records.
pub mod layout;

pub use index::{expand_indices, AMBIGUOUS_INDEX};
pub use layout::{attach_prefix, broadcast, layout_rows, rows_for, RowLayout};
