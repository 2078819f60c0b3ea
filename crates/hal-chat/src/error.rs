//! Error types for the response engine.

use thiserror::Error;

/// Result type for rule construction.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors detected while building a rule list.
///
/// Matching itself never fails; every problem is caught once, at
/// construction time.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The rule list has no rules at all.
    #[error("rule list is empty")]
    EmptyRuleSet,

    /// The last rule is not a catch-all, so some input could go unanswered.
    #[error("rule list has no catch-all rule")]
    MissingCatchAll,

    /// A catch-all rule appears before the end of the list.
    #[error("catch-all rule at position {0} shadows the rules after it")]
    CatchAllNotLast(usize),

    /// A rule has no response templates.
    #[error("rule `{0}` has no responses")]
    NoResponses(String),

    /// A response template is empty or only whitespace.
    #[error("rule `{0}` has a blank response")]
    EmptyResponse(String),

    /// A trigger pattern failed to compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A template refers to a capture group the pattern does not define.
    #[error("response `{response}` uses %{group} but `{pattern}` has {available} group(s)")]
    UnknownPlaceholder {
        /// The rule's pattern.
        pattern: String,
        /// The offending template.
        response: String,
        /// The referenced group number.
        group: usize,
        /// Number of capture groups in the pattern.
        available: usize,
    },
}
