//! Utility functions for rule implementations.

pub mod noqa;
pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use noqa::{is_suppressed, parse_noqa, Noqa};
#[doc(inline)]
pub use paths::{first_segment, replace_first_segment};
