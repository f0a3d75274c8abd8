//! Path matchers backing [`RouteTable::recognize`](super::RouteTable::recognize).
//!
//! A matcher maps a concrete request path to the group of routes sharing a
//! template and extracts the raw (still percent-encoded) parameter values.

use crate::{options::RouterOptions, url::TOKEN};
use memo_router_core::RouteLoadError;

/// A successful path match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// Group index supplied to [`Matcher::insert`].
    pub group: usize,
    /// `(name, raw value)` pairs in template order.
    pub params: Vec<(String, String)>,
}

/// Pluggable path-matching backend.
pub trait Matcher: Sized + Send + Sync + 'static {
    /// Create an empty matcher configured from the router options.
    fn new(options: &RouterOptions) -> Self;

    /// Add a `:token` template. Each distinct template is inserted once.
    fn insert(&mut self, template: &str, group: usize) -> Result<(), RouteLoadError>;

    /// Find the group whose template matches `path`.
    fn at(&self, path: &str) -> Option<PathMatch>;
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Linear segment-by-segment matcher. Templates are tried in insertion
/// order and the first match wins.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    strict: bool,
    sensitive: bool,
    templates: Vec<(Vec<Segment>, usize)>,
}

impl SegmentMatcher {
    fn split(&self, path: &str) -> Option<Vec<String>> {
        let mut path = path;
        if !self.strict && path.len() > 1 {
            path = path.strip_suffix('/').unwrap_or(path);
        }
        let path = path.strip_prefix('/')?;
        if path.is_empty() {
            return Some(Vec::new());
        }
        Some(path.split('/').map(str::to_string).collect())
    }

    fn literal_eq(&self, expected: &str, actual: &str) -> bool {
        if self.sensitive {
            expected == actual
        } else {
            expected.eq_ignore_ascii_case(actual)
        }
    }
}

impl Matcher for SegmentMatcher {
    fn new(options: &RouterOptions) -> Self {
        Self {
            strict: options.strict,
            sensitive: options.sensitive,
            templates: Vec::new(),
        }
    }

    fn insert(&mut self, template: &str, group: usize) -> Result<(), RouteLoadError> {
        let segments = self.split(template).ok_or_else(|| RouteLoadError::Matcher {
            path: template.to_string(),
            reason: "template must start with `/`".to_string(),
        })?;

        let segments = segments
            .into_iter()
            .map(|segment| match TOKEN.captures(&segment) {
                Some(caps) if caps[0].len() == segment.len() => Segment::Param(caps[1].to_string()),
                _ => Segment::Literal(segment),
            })
            .collect();
        self.templates.push((segments, group));
        Ok(())
    }

    fn at(&self, path: &str) -> Option<PathMatch> {
        let actual = self.split(path)?;
        'templates: for (segments, group) in &self.templates {
            if segments.len() != actual.len() {
                continue;
            }
            let mut params = Vec::new();
            for (segment, value) in segments.iter().zip(&actual) {
                match segment {
                    Segment::Literal(literal) if self.literal_eq(literal, value) => {}
                    Segment::Param(name) if !value.is_empty() => {
                        params.push((name.clone(), value.clone()));
                    }
                    _ => continue 'templates,
                }
            }
            return Some(PathMatch {
                group: *group,
                params,
            });
        }
        None
    }
}

/// [`Matcher`] backed by the `matchit` radix tree.
///
/// Case-insensitive matching is not supported; `sensitive` is ignored.
/// Conflicting templates (e.g. `/posts/:id` and `/posts/:slug`) are
/// rejected at insertion.
#[cfg(feature = "matchit")]
pub struct MatchitMatcher {
    strict: bool,
    router: matchit::Router<usize>,
}

#[cfg(feature = "matchit")]
impl MatchitMatcher {
    /// Rewrite `:id` placeholders to matchit's `{id}` syntax.
    pub fn convert(template: &str) -> String {
        TOKEN.replace_all(template, "{${1}}").into_owned()
    }
}

#[cfg(feature = "matchit")]
impl Matcher for MatchitMatcher {
    fn new(options: &RouterOptions) -> Self {
        Self {
            strict: options.strict,
            router: matchit::Router::new(),
        }
    }

    fn insert(&mut self, template: &str, group: usize) -> Result<(), RouteLoadError> {
        self.router
            .insert(Self::convert(template), group)
            .map_err(|e| RouteLoadError::Matcher {
                path: template.to_string(),
                reason: e.to_string(),
            })
    }

    fn at(&self, path: &str) -> Option<PathMatch> {
        let path = if !self.strict && path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        let matched = self.router.at(path).ok()?;
        Some(PathMatch {
            group: *matched.value,
            params: matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_matcher(options: &RouterOptions, templates: &[&str]) -> SegmentMatcher {
        let mut matcher = SegmentMatcher::new(options);
        for (group, template) in templates.iter().enumerate() {
            matcher.insert(template, group).unwrap();
        }
        matcher
    }

    #[test]
    fn test_segment_match() {
        let matcher = segment_matcher(
            &RouterOptions::new(),
            &["/", "/posts", "/posts/new", "/posts/:id", "/posts/:id/edit"],
        );

        assert_eq!(matcher.at("/").map(|m| m.group), Some(0));
        assert_eq!(matcher.at("/posts").map(|m| m.group), Some(1));
        assert_eq!(matcher.at("/posts/new").map(|m| m.group), Some(2));

        let m = matcher.at("/posts/42/edit").unwrap();
        assert_eq!(m.group, 4);
        assert_eq!(m.params, vec![("id".to_string(), "42".to_string())]);

        assert!(matcher.at("/posts/42/delete").is_none());
        assert!(matcher.at("/posts//edit").is_none());
        assert!(matcher.at("posts").is_none());
    }

    #[test]
    fn test_first_inserted_wins() {
        let matcher = segment_matcher(&RouterOptions::new(), &["/posts/:id", "/posts/new"]);
        assert_eq!(matcher.at("/posts/new").map(|m| m.group), Some(0));
    }

    #[test]
    fn test_trailing_slash() {
        let lenient = segment_matcher(&RouterOptions::new(), &["/posts"]);
        assert!(lenient.at("/posts/").is_some());

        let strict = segment_matcher(&RouterOptions::new().strict(true), &["/posts"]);
        assert!(strict.at("/posts").is_some());
        assert!(strict.at("/posts/").is_none());
    }

    #[test]
    fn test_case_sensitivity() {
        let lenient = segment_matcher(&RouterOptions::new(), &["/Posts"]);
        assert!(lenient.at("/posts").is_some());

        let sensitive = segment_matcher(&RouterOptions::new().sensitive(true), &["/Posts"]);
        assert!(sensitive.at("/posts").is_none());
        assert!(sensitive.at("/Posts").is_some());
    }

    #[test]
    fn test_partial_token_segment_is_literal() {
        let matcher = segment_matcher(&RouterOptions::new(), &["/files/:name.json"]);
        assert!(matcher.at("/files/:name.json").is_some());
        assert!(matcher.at("/files/report.json").is_none());
    }

    #[test]
    fn test_relative_template_rejected() {
        let mut matcher = SegmentMatcher::new(&RouterOptions::new());
        assert!(matches!(
            matcher.insert("posts", 0),
            Err(RouteLoadError::Matcher { .. })
        ));
    }

    #[cfg(feature = "matchit")]
    #[test]
    fn test_matchit_convert() {
        assert_eq!(MatchitMatcher::convert("/posts/:id/edit"), "/posts/{id}/edit");
        assert_eq!(
            MatchitMatcher::convert("/users/:user_id/posts/:id"),
            "/users/{user_id}/posts/{id}"
        );
    }

    #[cfg(feature = "matchit")]
    #[test]
    fn test_matchit_match() {
        let mut matcher = MatchitMatcher::new(&RouterOptions::new());
        matcher.insert("/posts", 0).unwrap();
        matcher.insert("/posts/:id", 1).unwrap();

        let m = matcher.at("/posts/7/").unwrap();
        assert_eq!(m.group, 1);
        assert_eq!(m.params, vec![("id".to_string(), "7".to_string())]);

        assert!(matcher.insert("/posts/:slug", 2).is_err());
    }
}
