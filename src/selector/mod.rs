//! CSS selector builder.
//!
//! Builds compound selectors part by part, rejecting repeated singletons
//! and parts added out of category order as soon as they happen:
//!
//! ```
//! use kata::selector::{css, Selector};
//!
//! let link = css().element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let pair = css().combine(&css().element("div").id("main")?, "+", &css().element("table").id("data")?)?;
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), kata::KataError>(())
//! ```
//!
//! Category order is element, id, class, attribute, pseudo-class,
//! pseudo-element.

mod combinator;
mod fragment;
mod part;

use std::fmt;

pub use combinator::{combine, CombinedSelector, Combinator};
pub use fragment::SelectorFragment;
pub use part::Part;

use crate::error::Result;

/// Anything that renders to a selector string.
pub trait Selector: fmt::Display {
    /// Render the canonical selector text.
    fn stringify(&self) -> String {
        self.to_string()
    }
}

/// Stateless entry point; every call starts a fresh fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSelectorBuilder;

/// The selector builder facade.
pub fn css() -> CssSelectorBuilder {
    CssSelectorBuilder
}

impl CssSelectorBuilder {
    pub fn element(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::Element, value)
    }

    pub fn id(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::Id, value)
    }

    pub fn class(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::Class, value)
    }

    pub fn attr(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::Attribute, value)
    }

    pub fn pseudo_class(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::PseudoClass, value)
    }

    pub fn pseudo_element(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::starting_with(Part::PseudoElement, value)
    }

    /// Combine two selectors with a combinator token (`" "`, `"+"`, `"~"` or `">"`).
    pub fn combine<A, B>(&self, left: &A, token: &str, right: &B) -> Result<CombinedSelector>
    where
        A: Selector + ?Sized,
        B: Selector + ?Sized,
    {
        Ok(combine(left, Combinator::parse(token)?, right))
    }
}
