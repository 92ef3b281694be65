use crate::constants::header;
use indexmap::IndexMap;

/// Response headers produced by an evaluation, in insertion order.
pub type Headers = IndexMap<String, String>;

/// Case-insensitive request-header map.
///
/// Names are folded to lowercase internally; values are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: IndexMap<String, String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a header, replacing any previous value for the same name.
    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut name = name.into();
        name.make_ascii_lowercase();
        self.entries.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
            self.entries
                .get(&name.to_ascii_lowercase())
                .map(String::as_str)
        } else {
            self.entries.get(name).map(String::as_str)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for RequestHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Ordered set of response-header mutations.
///
/// Two mutation modes exist: [`set`](Self::set) overwrites, and
/// [`add_vary`](Self::add_vary) merges a header name into the
/// comma-separated `Vary` value without duplicating it.
#[derive(Debug, Clone, Default)]
pub struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self {
            headers: Headers::new(),
        }
    }

    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Appends `name` to `Vary`, keeping existing tokens.
    ///
    /// Tokens are compared case-sensitively on the literal `", "`-separated
    /// entries. Idempotent: appending a name that is already present leaves
    /// the value untouched.
    pub fn add_vary(&mut self, name: &str) {
        let merged = match self.headers.get(header::VARY) {
            None => name.to_string(),
            Some(existing) => {
                if existing.split(", ").any(|token| token == name) {
                    return;
                }
                format!("{existing}, {name}")
            }
        };
        self.headers.insert(header::VARY.to_string(), merged);
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
