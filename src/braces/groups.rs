//! Locating brace groups within a pattern.

use crate::error::{KataError, Result};
use crate::span::offset_to_location;

/// A `{...}` span with no nested groups inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    source: &'a str,
    /// Byte offset of the opening `{`
    pub start: usize,
    /// Byte offset just past the closing `}`
    pub end: usize,
}

impl<'a> Group<'a> {
    /// Text between the braces.
    pub fn content(&self) -> &'a str {
        &self.source[self.start + 1..self.end - 1]
    }

    /// Comma-separated alternatives. Empty alternatives are kept.
    pub fn alternatives(&self) -> impl Iterator<Item = &'a str> {
        self.content().split(',')
    }

    /// The source with this group (braces included) replaced by `alternative`.
    pub fn substitute(&self, alternative: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + alternative.len());
        out.push_str(&self.source[..self.start]);
        out.push_str(alternative);
        out.push_str(&self.source[self.end..]);
        out
    }
}

/// Find the first closing brace and the nearest opening brace before it.
///
/// That pair never has another group between them, so resolving it first
/// expands nested groups from the inside out.
pub fn innermost_group(source: &str) -> Option<Group<'_>> {
    let mut open = None;

    for (i, c) in source.char_indices() {
        match c {
            '{' => open = Some(i),
            '}' => {
                if let Some(start) = open {
                    return Some(Group {
                        source,
                        start,
                        end: i + 1,
                    });
                }
            }
            _ => {}
        }
    }

    None
}

/// Reject patterns with a `}` that closes nothing or a `{` that is never closed.
pub fn check_balanced(source: &str) -> Result<()> {
    let mut open: Vec<usize> = Vec::new();

    for (i, c) in source.char_indices() {
        match c {
            '{' => open.push(i),
            '}' => {
                if open.pop().is_none() {
                    return Err(KataError::MalformedBraces {
                        message: "unmatched '}'".to_string(),
                        location: offset_to_location(source, i),
                        help: Some("Remove the '}' or add a matching '{' before it".to_string()),
                    });
                }
            }
            _ => {}
        }
    }

    match open.last() {
        Some(&i) => Err(KataError::MalformedBraces {
            message: "unclosed '{'".to_string(),
            location: offset_to_location(source, i),
            help: Some("Close the group with '}'".to_string()),
        }),
        None => Ok(()),
    }
}
