use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cookies a fully authenticated JD session normally carries. Their absence is
/// advisory only: some account types authenticate without them.
pub const WELL_KNOWN_AUTH_COOKIES: &[&str] = &["pt_key", "pt_pin"];

/// A full set of session cookies for one account.
///
/// Replaced wholesale on every load/parse; never merged incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialSet {
    cookies: BTreeMap<String, String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from name/value pairs, dropping pairs with an empty name or
    /// value. Later duplicates win.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let cookies = pairs
            .into_iter()
            .map(|(n, v)| (n.into(), v.into()))
            .filter(|(n, v)| !n.is_empty() && !v.is_empty())
            .collect();
        Self { cookies }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Well-known auth cookies not present in this set.
    pub fn missing_well_known(&self) -> Vec<&'static str> {
        WELL_KNOWN_AUTH_COOKIES
            .iter()
            .copied()
            .filter(|name| !self.cookies.contains_key(*name))
            .collect()
    }

    /// Render the set as a `Cookie` request-header value.
    pub fn to_cookie_header(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.cookies {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
