#![allow(dead_code)]

pub use workplan_test_utils::builders;
pub use workplan_test_utils::init_tracing;

/// Monday, 6 January 2025.
pub const MONDAY: &str = "2025-01-06";
/// Saturday, 4 January 2025.
pub const SATURDAY: &str = "2025-01-04";
