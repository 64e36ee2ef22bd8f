//! Source positions for brace diagnostics.

use std::fmt;

/// A location in an input pattern (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of the pattern
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to a Location (line/column).
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let offset = offset.min(source.len());
    let before = &source[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Location { offset, line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location_single_line() {
        let source = "a{b,c}";
        assert_eq!(offset_to_location(source, 0), Location::new(0, 1, 1));
        assert_eq!(offset_to_location(source, 1), Location::new(1, 1, 2));
        assert_eq!(offset_to_location(source, 6), Location::new(6, 1, 7));
    }

    #[test]
    fn test_offset_to_location_multiline() {
        let source = "x\n{a,b";
        assert_eq!(offset_to_location(source, 2), Location::new(2, 2, 1));
    }

    #[test]
    fn test_offset_counts_chars_not_bytes() {
        let source = "é{";
        // 'é' is two bytes but one column
        assert_eq!(offset_to_location(source, 2), Location::new(2, 1, 2));
    }

    #[test]
    fn test_offset_clamped() {
        assert_eq!(offset_to_location("ab", 10), Location::new(2, 1, 3));
    }
}
