//! Range/category filter engine over an arbitrary source table.
//!
//! The engine owns one source table and the subset that passes every declared
//! filter. Applying filters narrows each filter's displayed value to the
//! bounds of the new subset; those adjustments are reported as
//! [`FilterEvent::BoundsAdjusted`] and never re-trigger filtering.

mod bounds;
mod engine;
mod events;

pub use bounds::column_extent;
pub use engine::{FilterEngine, FilterState};
pub use events::{FilterEvent, FilterObserver};
