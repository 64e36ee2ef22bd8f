use miette::Diagnostic;
use thiserror::Error;

use crate::selector::Part;
use crate::span::Location;

/// Main error type for kata operations
#[derive(Error, Diagnostic, Debug)]
pub enum KataError {
    #[error("{part} is already set on this selector")]
    #[diagnostic(
        code(kata::selector::duplicate),
        help("element, id and pseudo-element may each occur only once per selector")
    )]
    DuplicateSingleton { part: Part },

    #[error("{part} cannot follow {after}")]
    #[diagnostic(
        code(kata::selector::order),
        help("selector parts must be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element")
    )]
    OutOfOrder { part: Part, after: Part },

    #[error("Malformed braces at {location}: {message}")]
    #[diagnostic(code(kata::braces::malformed))]
    MalformedBraces {
        message: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Expansion produced more than {limit} strings")]
    #[diagnostic(
        code(kata::braces::limit),
        help("Raise `expand.max_results` or pass a larger --max")
    )]
    TooManyExpansions { limit: usize },

    #[error("Unknown combinator: {token:?}")]
    #[diagnostic(
        code(kata::selector::combinator),
        help("Use one of \" \", \"+\", \"~\" or \">\"")
    )]
    UnknownCombinator { token: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(kata::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(kata::json))]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(kata::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(kata::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },
}

impl KataError {
    /// Whether this is a repeated element, id or pseudo-element.
    pub fn is_duplicate_singleton(&self) -> bool {
        matches!(self, KataError::DuplicateSingleton { .. })
    }

    /// Whether this is a selector part set after a later category.
    pub fn is_out_of_order(&self) -> bool {
        matches!(self, KataError::OutOfOrder { .. })
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
