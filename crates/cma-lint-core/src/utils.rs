//! Utility functions for rule implementations.

pub mod names;
pub mod paths;

#[doc(inline)]
pub use names::{is_type_name, mentions_any_suffix, mentions_type_with_suffix};
#[doc(inline)]
pub use paths::{contains_fragment, matches_pattern, normalize};
