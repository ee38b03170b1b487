//! Structured header comment blocks.
//!
//! [`pattern`] recognizes an existing block at the start of a file and
//! [`template`] renders the canonical one.

pub mod pattern;
pub mod template;

pub use pattern::{DEFAULT_DELIMITER, HeaderBlock, HeaderMatcher, MIN_DIVIDER_RUN};
pub use template::HeaderTemplate;
