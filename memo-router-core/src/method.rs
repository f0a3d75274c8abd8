//! HTTP verb sets.

use crate::error::ParseMethodError;
use bitflags::bitflags;
use std::{fmt, str::FromStr};

bitflags! {
    /// The set of HTTP verbs a route answers to.
    ///
    /// `Display` renders the set the way it appears in logs: `GET, POST`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Methods: u16 {
        /// `GET`
        const GET = 1 << 0;
        /// `POST`
        const POST = 1 << 1;
        /// `PUT`
        const PUT = 1 << 2;
        /// `PATCH`
        const PATCH = 1 << 3;
        /// `DELETE`
        const DELETE = 1 << 4;
        /// `HEAD`
        const HEAD = 1 << 5;
        /// `OPTIONS`
        const OPTIONS = 1 << 6;
        /// `CONNECT`
        const CONNECT = 1 << 7;
        /// `TRACE`
        const TRACE = 1 << 8;
    }
}

impl Methods {
    /// Parse a single verb, case-insensitively. `DEL` is accepted for `DELETE`.
    pub fn from_verb(verb: &str) -> Option<Self> {
        let upper = verb.trim().to_ascii_uppercase();
        match upper.as_str() {
            "DEL" => Some(Methods::DELETE),
            other => Methods::from_name(other),
        }
    }

    /// Iterate over the verb names in the set.
    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter_names().map(|(name, _)| name)
    }
}

impl fmt::Display for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, verb) in self.verbs().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(verb)?;
        }
        Ok(())
    }
}

impl FromStr for Methods {
    type Err = ParseMethodError;

    /// Parse a comma-separated verb list such as `"get, post"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut methods = Methods::empty();
        for verb in s.split(',').filter(|v| !v.trim().is_empty()) {
            methods |= Methods::from_verb(verb).ok_or_else(|| ParseMethodError(verb.trim().to_string()))?;
        }
        Ok(methods)
    }
}
