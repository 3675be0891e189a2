//! Parsing of `path?query` asset specifiers.
//!
//! Build pipelines address sub-resources of a file through query parameters
//! (`comp.vue?vue&type=style&index=0`). [`parse_path_query`] splits the
//! specifier and decodes the parameters, keeping a key without a value as a
//! boolean flag.

/// A decoded query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// The key appeared without a value (`?vue`).
    Flag,
    /// The key carried a percent-decoded value (`?type=style`).
    Value(String),
}

/// A `path?query` specifier split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    /// Path portion before the `?`.
    pub url: String,
    /// Raw query string; empty when the specifier had none.
    pub query: String,
    /// Decoded parameters in query order.
    pub params: Vec<(String, QueryValue)>,
}

impl PathQuery {
    /// Look up a parameter by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` appeared as a valueless flag.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(QueryValue::Flag))
    }

    /// The decoded value of `key`, if it carried one.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(QueryValue::Value(v)) => Some(v),
            _ => None,
        }
    }
}

/// Split an import specifier into path and decoded query parameters.
#[must_use]
pub fn parse_path_query(specifier: &str) -> PathQuery {
    let (url, query) = match specifier.split_once('?') {
        Some((url, query)) => (url, query),
        None => (specifier, ""),
    };

    let params = url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| {
            let value = if value.is_empty() {
                QueryValue::Flag
            } else {
                QueryValue::Value(value.into_owned())
            };
            (key.into_owned(), value)
        })
        .collect();

    PathQuery {
        url: url.to_string(),
        query: query.to_string(),
        params,
    }
}
