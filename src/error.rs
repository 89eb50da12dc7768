use std::fmt;

/// Result alias used by every fallible router operation.
pub type Result<T, E = RouterError> = std::result::Result<T, E>;

/// Router configuration error
///
/// Returned synchronously from registration (`add` and its shorthands) and
/// from named-route invocation. An unmatched `dispatch` is never an error; it
/// yields [`crate::NOT_FOUND`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The method is not one of GET, POST, PUT, PATCH or DELETE
    InvalidMethod {
        /// The method as supplied by the caller
        method: String,
    },
    /// A route with the same compiled pattern already exists for this method
    DuplicatePattern {
        /// Uppercase method token
        method: String,
        /// The compiled pattern that collided
        pattern: String,
    },
    /// No registered route carries the requested name
    RouteNotFound {
        /// The name that was looked up
        name: String,
    },
    /// The template did not compile into a valid matcher
    ///
    /// Literal text is passed through to the regex engine unescaped, so
    /// unbalanced metacharacters or a repeated placeholder name end up here.
    InvalidPattern {
        /// The full template, group prefix included
        template: String,
        /// Message from the regex compiler
        reason: String,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidMethod { method } => {
                write!(
                    f,
                    "Invalid method '{}'. Expected one of GET, POST, PUT, PATCH, DELETE",
                    method
                )
            }
            RouterError::DuplicatePattern { method, pattern } => {
                write!(f, "Pattern already exists: {} {}", method, pattern)
            }
            RouterError::RouteNotFound { name } => {
                write!(f, "Route not found: no route is named '{}'", name)
            }
            RouterError::InvalidPattern { template, reason } => {
                write!(f, "Invalid route template '{}': {}", template, reason)
            }
        }
    }
}

impl std::error::Error for RouterError {}
