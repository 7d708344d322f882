use thiserror::Error;

/// Top-level error type for Immogram.
///
/// Every variant is a configuration or programmer defect. Callers propagate
/// them with `?`; nothing here is meant to be retried.
#[derive(Debug, Error)]
pub enum ImmogramError {
    /// A catalog lacks a key the caller asked for.
    #[error(transparent)]
    MissingKey(#[from] MissingKeyError),

    /// A pattern is malformed or references an argument that was not supplied.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A method was called on a task that lacks the field it requires.
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),

    /// Catalog source error (unknown locale, bad TOML, bad date/time pattern).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// A message key is absent from a locale's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing message key '{key}' in locale '{locale}'")]
pub struct MissingKeyError {
    pub locale: String,
    pub key: String,
}

/// Placeholder substitution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `{index}` appears in the pattern but fewer arguments were supplied.
    #[error("pattern {pattern:?} references argument {{{index}}} but only {supplied} supplied")]
    MissingArgument {
        pattern: String,
        index: usize,
        supplied: usize,
    },

    /// A `{` with no closing `}`.
    #[error("unterminated placeholder at byte {offset} in {pattern:?}")]
    Unterminated { pattern: String, offset: usize },

    /// Something other than a decimal index between braces.
    #[error("invalid placeholder {{{placeholder}}} at byte {offset} in {pattern:?}")]
    InvalidPlaceholder {
        pattern: String,
        offset: usize,
        placeholder: String,
    },

    /// A lone `}` outside a placeholder (use `}}` for a literal brace).
    #[error("unmatched '}}' at byte {offset} in {pattern:?}")]
    UnmatchedClose { pattern: String, offset: usize },

    /// A catalog pattern needs more arguments than its message supplies.
    #[error("pattern for '{key}' needs {required} argument(s), message supplies {declared}")]
    ArityMismatch {
        key: String,
        required: usize,
        declared: usize,
    },
}

/// An optional task field required by a message is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task '{alias}' has no {field}")]
pub struct PreconditionViolation {
    pub alias: String,
    pub field: &'static str,
}
