//! Sales item module
//!
//! A sales item owns its comments and enforces one comment per author.

pub mod model;
pub mod stats;

pub use model::SalesItem;
pub use stats::ReviewStats;
