use crate::util::normalize_lower;
use std::collections::HashSet;

/// Header policy for the `Access-Control-Allow-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// The configuration contained `"*"`: reflect whatever headers the
    /// preflight request asked for.
    Any,
    /// Explicit list. Entries keep the author's casing for emission;
    /// duplicates are collapsed case-insensitively, first spelling wins.
    List(Vec<String>),
}

impl AllowedHeaders {
    pub(crate) fn normalize(headers: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        for value in headers {
            let trimmed = value.trim().to_string();
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        if deduped.iter().any(|header| header == "*") {
            Self::Any
        } else {
            Self::List(deduped)
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
