//! Combinators and combined selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::KataError;

use super::Selector;

/// Relation between two selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    Adjacent,
    /// `a ~ b`
    Sibling,
}

impl Combinator {
    /// The combinator token.
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::Adjacent => "+",
            Combinator::Sibling => "~",
        }
    }

    /// Parse a combinator token. Only the exact single-character tokens are accepted.
    pub fn parse(token: &str) -> Result<Self, KataError> {
        match token {
            " " => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::Adjacent),
            "~" => Ok(Combinator::Sibling),
            _ => Err(KataError::UnknownCombinator {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combinator {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Two selectors joined by a combinator, frozen as rendered text.
///
/// Only renders; further parts cannot be added, but it can be combined again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Selector for CombinedSelector {}

/// Join two selectors as `"<left> <combinator> <right>"`.
///
/// The combinator is padded with one space on each side whatever the
/// token, so the descendant combinator renders as three spaces.
pub fn combine<A, B>(left: &A, combinator: Combinator, right: &B) -> CombinedSelector
where
    A: Selector + ?Sized,
    B: Selector + ?Sized,
{
    CombinedSelector {
        text: format!("{} {} {}", left.stringify(), combinator, right.stringify()),
    }
}
