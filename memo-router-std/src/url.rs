//! Reverse URL generation for named routes.
//!
//! `:token` placeholders in a route's template are filled from the supplied
//! parameters; every parameter that did not fill a placeholder is appended as
//! a query string, in the order the parameters were inserted.
//!
//! ```rust,ignore
//! table.url("edit_channel", Some(&url_params! { "id" => 1, "name" => "foo", "page" => 2 }));
//! // => Some("/channels/1/edit?name=foo&page=2")
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};
use once_cell::sync::Lazy;

/// Characters escaped in path values and query pairs: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `:name` placeholder; names are ASCII word characters not starting with a digit.
pub(crate) static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("token pattern is a valid regex"));

/// A parameter value: a single scalar or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// One value.
    One(String),
    /// Several values; repeated as `key=a&key=b` in a query string.
    Many(Vec<String>),
}

impl ParamValue {
    /// The value used when filling a path placeholder.
    pub fn first(&self) -> Option<&str> {
        match self {
            ParamValue::One(value) => Some(value),
            ParamValue::Many(values) => values.first().map(String::as_str),
        }
    }

    fn values(&self) -> &[String] {
        match self {
            ParamValue::One(value) => std::slice::from_ref(value),
            ParamValue::Many(values) => values,
        }
    }
}

macro_rules! scalar_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::One(value.to_string())
                }
            }
        )*
    };
}

scalar_param!(&str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        let values = values.into_iter().flat_map(|v| {
            let value: ParamValue = v.into();
            match value {
                ParamValue::One(value) => vec![value],
                ParamValue::Many(values) => values,
            }
        });
        ParamValue::Many(values.collect())
    }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Vec::from(values).into()
    }
}

/// Parameters for [`build`], kept in insertion order.
///
/// Inserting a key that is already present replaces its value in place, so
/// the key keeps its original position in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pairs: Vec<(String, ParamValue)>,
}

impl UrlParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add a parameter (builder form).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for UrlParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = UrlParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Percent-encode a path value or query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Fill `template` from `params` and append the leftovers as a query string.
///
/// A placeholder without a matching parameter stays in the output verbatim.
/// An empty list leaves its placeholder unfilled and adds nothing to the query.
pub fn build(template: &str, params: Option<&UrlParams>) -> String {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return template.to_string();
    };

    let mut consumed: Vec<String> = Vec::new();
    let path = TOKEN.replace_all(template, |caps: &Captures<'_>| {
        let key = &caps[1];
        match params.get(key).and_then(ParamValue::first) {
            Some(value) => {
                consumed.push(key.to_string());
                encode_component(value)
            }
            None => caps[0].to_string(),
        }
    });

    let query = params
        .iter()
        .filter(|(key, _)| !consumed.iter().any(|c| c.as_str() == *key))
        .flat_map(|(key, value)| {
            let key = encode_component(key);
            value
                .values()
                .iter()
                .map(move |v| format!("{}={}", key, encode_component(v)))
        })
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.into_owned()
    } else if path.contains('?') {
        format!("{}&{}", path, query)
    } else {
        format!("{}?{}", path, query)
    }
}

/// Names of the `:token` placeholders in `template`, left to right.
pub fn template_params(template: &str) -> Vec<String> {
    TOKEN
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
