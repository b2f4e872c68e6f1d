//! Array API aligned bindings
//!
//! - manipulation: circular shift and index wrapping
//! - helpers: shared conversions (internal)

pub mod helpers;
pub mod manipulation;
