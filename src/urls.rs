// src/urls.rs

use url::form_urlencoded;

/// Decoded query string (or form body) that keeps the original order.
/// Lookups return the first value for a key, like `URLSearchParams.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn parse(raw: &str) -> Self {
        Query(
            form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Copy with `key` set to `value`: the first occurrence is replaced in
    /// place, later ones dropped, and a missing key is appended.
    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        let mut seen = false;

        for (k, v) in &self.0 {
            if k == key {
                if !seen {
                    out.push((k.clone(), value.to_string()));
                    seen = true;
                }
            } else {
                out.push((k.clone(), v.clone()));
            }
        }

        if !seen {
            out.push((key.to_string(), value.to_string()));
        }

        Query(out)
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// `path?k=v&...`, or just `path` when there are no pairs.
pub fn with_query<K: AsRef<str>, V: AsRef<str>>(path: &str, pairs: &[(K, V)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();

    format!("{path}?{query}")
}
