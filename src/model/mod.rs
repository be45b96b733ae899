//! Plain data: order statuses, tracked orders, and the transition rules between them.

pub mod status;
pub mod tracking;

pub use status::*;
pub use tracking::*;
