//! Selector part categories.

use std::fmt;
use std::str::FromStr;

use crate::error::KataError;

/// A category of selector part, declared in the order parts must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Part {
    /// All parts in category order.
    pub const ALL: [Part; 6] = [
        Part::Element,
        Part::Id,
        Part::Class,
        Part::Attribute,
        Part::PseudoClass,
        Part::PseudoElement,
    ];

    /// Whether at most one value of this part may appear in a selector.
    pub fn is_singleton(self) -> bool {
        matches!(self, Part::Element | Part::Id | Part::PseudoElement)
    }

    pub fn name(self) -> &'static str {
        match self {
            Part::Element => "element",
            Part::Id => "id",
            Part::Class => "class",
            Part::Attribute => "attribute",
            Part::PseudoClass => "pseudo-class",
            Part::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Part {
    type Err = KataError;

    /// Accepts the display names plus the short `attr` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "element" => Ok(Part::Element),
            "id" => Ok(Part::Id),
            "class" => Ok(Part::Class),
            "attr" | "attribute" => Ok(Part::Attribute),
            "pseudo-class" | "pseudo_class" => Ok(Part::PseudoClass),
            "pseudo-element" | "pseudo_element" => Ok(Part::PseudoElement),
            _ => Err(KataError::Parse {
                message: format!("Unknown selector part: '{}'", s),
                help: Some(
                    "Use element, id, class, attr, pseudo-class or pseudo-element".to_string(),
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let mut sorted = Part::ALL;
        sorted.sort();
        assert_eq!(sorted, Part::ALL);
        assert!(Part::Element < Part::Id);
        assert!(Part::PseudoClass < Part::PseudoElement);
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<Part> = Part::ALL.into_iter().filter(|p| p.is_singleton()).collect();
        assert_eq!(singletons, vec![Part::Element, Part::Id, Part::PseudoElement]);
    }

    #[test]
    fn test_parse_names() {
        for part in Part::ALL {
            assert_eq!(part.name().parse::<Part>().unwrap(), part);
        }
        assert_eq!("attr".parse::<Part>().unwrap(), Part::Attribute);
        assert_eq!("Pseudo_Class".parse::<Part>().unwrap(), Part::PseudoClass);
        assert!("tag".parse::<Part>().is_err());
    }

    #[test]
    fn test_unknown_part_echoes_input() {
        match " Tag ".parse::<Part>() {
            Err(KataError::Parse { message, .. }) => {
                assert_eq!(message, "Unknown selector part: ' Tag '");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }
}
