//! Path template compilation.
//!
//! A template such as `/users/{id}/posts/{post}` keeps its literal text and
//! turns every `{name}` placeholder into a named capture matching one or more
//! non-`/` characters. Nothing else is escaped or validated: literal text is
//! handed to the regex engine as-is.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::error::{Result, RouterError};

/// Maximum number of path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the dispatch path.
///
/// Names are shared with the compiled pattern; values are per-request data.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

#[allow(clippy::expect_used)]
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex is valid"));

/// Path parameters extracted by a successful match
///
/// Values are kept in the order their placeholders appear in the template, so
/// a handler for `/users/{id}/posts/{post}` sees `params[0] == id` and
/// `params[1] == post`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(ParamVec);

impl Params {
    /// Empty parameter list, as passed for name-based invocation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional value
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|(_, v)| v.as_str())
    }

    /// Get a path parameter by placeholder name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(name, value)` pairs in placeholder order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Values only, in placeholder order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    /// Convert to HashMap for callers that want keyed access
    /// Note: This allocates - use get_path_param() on the dispatch path
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Positional access, `params[0]` being the first placeholder's value
///
/// # Panics
///
/// When `index` is out of range. [`Router::route`](crate::Router::route)
/// invokes handlers with empty `Params`, so handlers that may be invoked by
/// name should use [`Params::get`] instead.
impl Index<usize> for Params {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index].1
    }
}

impl From<ParamVec> for Params {
    fn from(params: ParamVec) -> Self {
        Self(params)
    }
}

/// Compiled matcher for one route template
///
/// Two patterns are equal when their compiled pattern strings are equal; this
/// is the comparison used to reject duplicate registrations.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// Compiled pattern string, unanchored (e.g. `/users/(?P<id>[^/]+)`)
    source: String,
    /// `source` anchored at both ends
    regex: Regex,
    /// Placeholder names in template order
    param_names: Vec<Arc<str>>,
}

impl PathPattern {
    /// Compile a path template
    ///
    /// Trailing `/` characters are stripped first; a template that strips to
    /// nothing becomes the root `/`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidPattern`] when the resulting expression does not
    /// compile, e.g. unbalanced parentheses in literal text or a placeholder
    /// name used twice.
    pub fn compile(template: &str) -> Result<Self> {
        let trimmed = normalize_path(template);

        let source = PLACEHOLDER
            .replace_all(trimmed, "(?P<${1}>[^/]+)")
            .into_owned();
        let param_names = PLACEHOLDER
            .captures_iter(trimmed)
            .filter_map(|caps| caps.get(1).map(|m| Arc::from(m.as_str())))
            .collect();

        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            RouterError::InvalidPattern {
                template: template.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            source,
            regex,
            param_names,
        })
    }

    /// Compiled pattern string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder names in template order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.param_names.iter().map(|n| n.as_ref())
    }

    /// Whole-path match test
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and extract its parameters
    ///
    /// Returns `None` unless the entire path matches.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = ParamVec::new();
        for name in &self.param_names {
            let value = caps
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            params.push((Arc::clone(name), value));
        }
        Some(Params(params))
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Strip trailing `/`, mapping the empty result to the root path.
pub(crate) fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_template() {
        let pattern = PathPattern::compile("/users/list").unwrap();
        assert_eq!(pattern.as_str(), "/users/list");
        assert!(pattern.is_match("/users/list"));
        assert!(!pattern.is_match("/users/list/more"));
        assert!(!pattern.is_match("/prefix/users/list"));
        assert_eq!(pattern.param_names().count(), 0);
    }

    #[test]
    fn test_placeholder_becomes_named_capture() {
        let pattern = PathPattern::compile("/users/{id}/posts/{post}").unwrap();
        assert_eq!(
            pattern.as_str(),
            "/users/(?P<id>[^/]+)/posts/(?P<post>[^/]+)"
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id", "post"]);

        let params = pattern.captures("/users/7/posts/hello-world").unwrap();
        assert_eq!(params.values().collect::<Vec<_>>(), vec!["7", "hello-world"]);
        assert_eq!(params.get_path_param("post"), Some("hello-world"));
    }

    #[test]
    fn test_placeholder_rejects_empty_and_slash() {
        let pattern = PathPattern::compile("/items/{id}").unwrap();
        assert!(pattern.is_match("/items/abc.def"));
        assert!(!pattern.is_match("/items/"));
        assert!(!pattern.is_match("/items"));
        assert!(!pattern.is_match("/items/a/b"));
    }

    #[test]
    fn test_trailing_slash_and_root() {
        assert_eq!(PathPattern::compile("/test/").unwrap().as_str(), "/test");
        assert_eq!(PathPattern::compile("/").unwrap().as_str(), "/");
        assert_eq!(PathPattern::compile("").unwrap().as_str(), "/");
        assert!(PathPattern::compile("").unwrap().is_match("/"));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let a = PathPattern::compile("/a/{b}/c").unwrap();
        let b = PathPattern::compile("/a/{b}/c").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_invalid_template() {
        let err = PathPattern::compile("/broken(").unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));

        let err = PathPattern::compile("/{id}/{id}").unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
    }

    #[test]
    fn test_params_positional_access() {
        let pattern = PathPattern::compile("/{a}/{b}").unwrap();
        let params = pattern.captures("/x/y").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(&params[0], "x");
        assert_eq!(params.get(1), Some("y"));
        assert_eq!(params.get(2), None);
        assert_eq!(params.to_map().get("a"), Some(&"x".to_string()));
    }

    #[test]
    #[should_panic]
    fn test_index_past_end_panics() {
        let params = Params::new();
        let _ = &params[0];
    }
}
