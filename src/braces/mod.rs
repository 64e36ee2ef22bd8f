//! Brace expansion.
//!
//! Expands shell-style alternation groups into every string they describe:
//!
//! ```
//! let mut out = kata::expand_braces("thumbnail.{png,jp{e,}g}").unwrap();
//! out.sort();
//! assert_eq!(out, ["thumbnail.jpeg", "thumbnail.jpg", "thumbnail.png"]);
//! ```
//!
//! Groups may be nested or sequential. Text outside groups is copied
//! through unchanged, and a pattern without braces expands to itself.
//! Results come back in breadth-first order; treat them as a set.

mod expander;
pub mod groups;

pub use expander::Expander;
pub use groups::{innermost_group, Group};

use crate::error::Result;

/// Expand every brace group in `input` with the default options.
pub fn expand_braces(input: &str) -> Result<Vec<String>> {
    Expander::new().expand(input)
}
