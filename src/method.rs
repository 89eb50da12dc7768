//! The closed set of HTTP methods a route can be registered under.

use std::fmt;
use std::str::FromStr;

use http::Method;

use crate::error::RouterError;

/// HTTP method accepted at registration
///
/// Parsing is case-insensitive: `"get"`, `"Get"` and `"GET"` all yield
/// [`RouteMethod::Get`]. Anything outside the five verbs is rejected with
/// [`RouterError::InvalidMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RouteMethod {
    /// Every supported method, in declaration order
    pub const ALL: [RouteMethod; 5] = [
        RouteMethod::Get,
        RouteMethod::Post,
        RouteMethod::Put,
        RouteMethod::Patch,
        RouteMethod::Delete,
    ];

    /// Uppercase token, as used for dispatch lookup
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Patch => "PATCH",
            RouteMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMethod {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        RouteMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or_else(|| RouterError::InvalidMethod {
                method: s.to_string(),
            })
    }
}

impl From<RouteMethod> for Method {
    fn from(method: RouteMethod) -> Self {
        match method {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Patch => Method::PATCH,
            RouteMethod::Delete => Method::DELETE,
        }
    }
}

impl TryFrom<&Method> for RouteMethod {
    type Error = RouterError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(RouteMethod::Get),
            Method::POST => Ok(RouteMethod::Post),
            Method::PUT => Ok(RouteMethod::Put),
            Method::PATCH => Ok(RouteMethod::Patch),
            Method::DELETE => Ok(RouteMethod::Delete),
            _ => Err(RouterError::InvalidMethod {
                method: method.as_str().to_string(),
            }),
        }
    }
}
