//! Layout engine for residence timelines.
//!
//! Each building is laid out on its own: residents are sorted by start year
//! and greedily packed into the lowest row whose last occupant has already
//! left. [`compute_year_range`] gives the decade-rounded axis bounds across
//! every building, and [`build_snapshot`] does both for a whole dataset.

mod engine;
mod range;
mod snapshot;

pub use engine::{LaidOutBuilding, layout, layout_building};
pub use range::compute_year_range;
pub use snapshot::{BuildingOrder, LayoutOptions, TimelineSnapshot, build_snapshot};
