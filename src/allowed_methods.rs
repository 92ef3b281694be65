use crate::util::normalize_upper;

/// Method policy for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethods {
    /// The configuration contained `"*"`: echo whatever method the preflight
    /// request asked for.
    Any,
    /// Explicit list, uppercased for emission.
    List(Vec<String>),
}

impl AllowedMethods {
    pub(crate) fn normalize(methods: Vec<String>) -> Self {
        let methods: Vec<String> = methods
            .into_iter()
            .map(|method| normalize_upper(&method))
            .collect();

        if methods.iter().any(|method| method == "*") {
            Self::Any
        } else {
            Self::List(methods)
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
