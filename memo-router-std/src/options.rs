//! Router-wide options.

/// Options applied to every route registered through a builder.
///
/// # Example
///
/// ```rust,ignore
/// let options = RouterOptions::new().with_prefix("/api").strict(true);
/// let builder = RouteTableBuilder::with_options(registry, options);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterOptions {
    /// Prepended to every registered path.
    pub prefix: Option<String>,
    /// Whether a trailing slash is significant when recognising paths.
    pub strict: bool,
    /// Whether literal path segments are compared case-sensitively.
    pub sensitive: bool,
}

impl RouterOptions {
    /// Create default options: no prefix, lenient matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set strict trailing-slash handling.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set case-sensitive matching.
    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Apply the prefix to `path`.
    pub(crate) fn prefixed(&self, path: &str) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => join_path(prefix, path),
            _ => path.to_string(),
        }
    }
}

/// Join two path fragments with exactly one slash between them.
///
/// An empty `suffix` yields `prefix` unchanged; an empty result is `/`.
/// Runs of slashes inside either fragment collapse to one.
pub fn join_path(prefix: &str, suffix: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + suffix.len() + 1);
    for segment in prefix.split('/').chain(suffix.split('/')) {
        if segment.is_empty() {
            continue;
        }
        joined.push('/');
        joined.push_str(segment);
    }
    if joined.is_empty() {
        joined.push('/');
    }
    if !prefix.starts_with('/') && !prefix.is_empty() {
        joined.remove(0);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/posts", ""), "/posts");
        assert_eq!(join_path("/posts", "new"), "/posts/new");
        assert_eq!(join_path("/posts/", ":id/edit"), "/posts/:id/edit");
        assert_eq!(join_path("/posts", "/:id"), "/posts/:id");
        assert_eq!(join_path("/", ""), "/");
        assert_eq!(join_path("", ""), "/");
        assert_eq!(join_path("", "new"), "/new");
        assert_eq!(join_path("//api//v1", "users"), "/api/v1/users");
        assert_eq!(join_path("posts", ":id"), "posts/:id");
    }

    #[test]
    fn test_prefixed() {
        let options = RouterOptions::new().with_prefix("/api");
        assert_eq!(options.prefixed("/posts"), "/api/posts");
        assert_eq!(options.prefixed("/"), "/api");
        assert_eq!(RouterOptions::new().prefixed("/posts"), "/posts");
    }

    #[test]
    fn test_builder_flags() {
        let options = RouterOptions::new().strict(true).sensitive(true);
        assert!(options.strict);
        assert!(options.sensitive);
        assert_eq!(options.prefix, None);
    }
}
