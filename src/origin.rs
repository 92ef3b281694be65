use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

fn is_meta_character(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    )
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Origin policy, decided once at normalization time.
#[derive(Clone, Debug, PartialEq)]
pub enum AllowedOrigins {
    /// The configuration contained the literal `"*"`.
    Any,
    /// Exactly one configured origin and no patterns. The response header is
    /// provably independent of the request, so it can be emitted without
    /// `Vary: Origin`.
    Single(String),
    /// General case: exact entries checked before compiled patterns.
    List(OriginList),
}

impl AllowedOrigins {
    pub(crate) fn normalize(
        mut origins: Vec<String>,
        patterns: Vec<String>,
    ) -> Result<Self, PatternError> {
        if origins.iter().any(|origin| origin == "*") {
            return Ok(Self::Any);
        }

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            compiled.push(OriginPattern::compile(pattern)?);
        }
        for origin in &origins {
            if origin.contains('*') {
                compiled.push(OriginPattern::from_wildcard(origin)?);
            }
        }

        if compiled.is_empty() && origins.len() == 1 {
            return Ok(Self::Single(origins.remove(0)));
        }

        Ok(Self::List(OriginList {
            origins,
            patterns: compiled,
        }))
    }

    /// Whether the given request origin is granted by this policy.
    ///
    /// Exact entries are consulted before patterns; both compare the literal
    /// origin value, case-sensitively.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Single(allowed) => allowed == origin,
            Self::List(list) => list.allows(origin),
        }
    }
}

/// Exact origin entries plus compiled patterns.
///
/// Patterns hold the configuration-supplied regexes first, followed by one
/// anchored pattern per wildcard-containing origin entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OriginList {
    origins: Vec<String>,
    patterns: Vec<OriginPattern>,
}

impl OriginList {
    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn patterns(&self) -> &[OriginPattern] {
        &self.patterns
    }

    fn allows(&self, origin: &str) -> bool {
        if self.origins.iter().any(|candidate| candidate == origin) {
            return true;
        }
        self.patterns.iter().any(|pattern| pattern.matches(origin))
    }
}

/// A compiled origin pattern, retaining its source for comparison and
/// diagnostics.
#[derive(Clone)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    /// Compiles a regex source as-is. Unanchored sources match substrings.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(pattern).map_err(|source| PatternError::Build {
            pattern: pattern.to_owned(),
            source: Box::new(source),
        })?;

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// Expands a `*` wildcard origin into an anchored pattern.
    ///
    /// Every character is quoted first, then each quoted `*` becomes `.*`.
    /// Quoting happens before substitution, so the expansion is
    /// unconstrained: `https://*.example.com` matches
    /// `https://a.b.example.com` as well as `https://evil.example.com`.
    /// Accepted, documented behavior.
    pub fn from_wildcard(origin: &str) -> Result<Self, PatternError> {
        let mut pattern = String::with_capacity(origin.len() + 4);
        pattern.push('^');
        for ch in origin.chars() {
            match ch {
                '*' => pattern.push_str(".*"),
                ch if is_meta_character(ch) => {
                    pattern.push('\\');
                    pattern.push(ch);
                }
                ch => pattern.push(ch),
            }
        }
        pattern.push('$');

        Self::compile(&pattern)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin)
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginPattern").field(&self.source).finish()
    }
}

impl PartialEq for OriginPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for OriginPattern {}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
