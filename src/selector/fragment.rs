//! A single compound selector, validated as it is built.

use std::fmt;

use serde::Serialize;

use crate::error::{KataError, Result};

use super::part::Part;
use super::Selector;

/// One compound selector (no combinators).
///
/// Parts must be added in category order and element, id and
/// pseudo-element may each be set once. Violations fail at the call
/// that breaks the rule; the fragment is consumed either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
}

impl SelectorFragment {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::Element, value)
    }

    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::Id, value)
    }

    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::Class, value)
    }

    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::Attribute, value)
    }

    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::PseudoClass, value)
    }

    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.apply(Part::PseudoElement, value)
    }

    /// Add a value for `part`, checking uniqueness first and then order.
    pub fn apply(mut self, part: Part, value: impl Into<String>) -> Result<Self> {
        if part.is_singleton() && self.has(part) {
            return Err(KataError::DuplicateSingleton { part });
        }
        if let Some(after) = self.last_part() {
            if after > part {
                return Err(KataError::OutOfOrder { part, after });
            }
        }

        self.insert(part, value.into());
        Ok(self)
    }

    /// Start a fragment whose only part is `part`.
    pub(crate) fn starting_with(part: Part, value: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.insert(part, value.into());
        fragment
    }

    /// Whether any value of `part` has been set.
    pub fn has(&self, part: Part) -> bool {
        match part {
            Part::Element => self.element.is_some(),
            Part::Id => self.id.is_some(),
            Part::Class => !self.classes.is_empty(),
            Part::Attribute => !self.attributes.is_empty(),
            Part::PseudoClass => !self.pseudo_classes.is_empty(),
            Part::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The latest category present, if any.
    pub fn last_part(&self) -> Option<Part> {
        Part::ALL.into_iter().rev().find(|&part| self.has(part))
    }

    /// Whether no part has been set.
    pub fn is_empty(&self) -> bool {
        self.last_part().is_none()
    }

    fn insert(&mut self, part: Part, value: String) {
        match part {
            Part::Element => self.element = Some(value),
            Part::Id => self.id = Some(value),
            Part::Class => self.classes.push(value),
            Part::Attribute => self.attributes.push(value),
            Part::PseudoClass => self.pseudo_classes.push(value),
            Part::PseudoElement => self.pseudo_element = Some(value),
        }
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        if !self.classes.is_empty() {
            write!(f, ".{}", self.classes.join("."))?;
        }
        if !self.attributes.is_empty() {
            write!(f, "[{}]", self.attributes.join(","))?;
        }
        if !self.pseudo_classes.is_empty() {
            write!(f, ":{}", self.pseudo_classes.join(":"))?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{}", pseudo_element)?;
        }
        Ok(())
    }
}

impl Selector for SelectorFragment {}
