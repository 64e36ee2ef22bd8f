//! kata - brace expansion and CSS selector building
//!
//! Two independent pieces:
//! - [`braces`] expands nested `{a,b}` alternation groups into every string
//!   they describe.
//! - [`selector`] builds CSS selectors part by part, rejecting parts given
//!   twice or out of order at the call that adds them.

pub mod braces;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod selector;
pub mod span;

pub use braces::{expand_braces, Expander};
pub use config::{Config, ExpandConfig, OutputFormat};
pub use error::{KataError, Result};
pub use selector::{combine, css, CombinedSelector, Combinator, CssSelectorBuilder, Part, Selector, SelectorFragment};
pub use span::Location;
