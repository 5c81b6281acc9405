//! KVP (Key-Value Pair) query string assembly.
//!
//! Requests are collected as an ordered list of pairs and serialized in a
//! single step, so separators are only ever written in one place.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wcs_common::{WcsError, WcsResult};

/// Characters escaped by ECMAScript `encodeURI`.
///
/// Everything outside the URI unreserved and reserved sets is escaped, which
/// includes `%` itself. `? & = , ( )` and the other delimiters pass through.
const ENCODE_URI_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a complete URL with `encodeURI` semantics.
pub fn encode_uri(url: &str) -> String {
    utf8_percent_encode(url, ENCODE_URI_SET).to_string()
}

/// Make a service address ready for appending KVP parameters.
///
/// - no `?`: append one
/// - `?` with parameters after it: append `&` unless already present
/// - trailing `?` or `&`: unchanged
///
/// Applying this twice gives the same result as applying it once.
pub fn prepare_base_url(url: &str) -> WcsResult<String> {
    if url.is_empty() {
        return Err(WcsError::Argument(
            "The specified service address is empty".to_string(),
        ));
    }

    let mut prepared = url.to_string();
    match url.find('?') {
        None => prepared.push('?'),
        Some(idx) if idx != url.len() - 1 && !url.ends_with('&') => prepared.push('&'),
        Some(_) => {}
    }

    Ok(prepared)
}

/// An ordered list of query parameters.
///
/// Names are case-sensitive and keep insertion order; a name may repeat
/// (WCS 2.0 uses one `SUBSET` per axis).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvpQuery {
    params: Vec<(String, String)>,
}

impl KvpQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Builder-style append.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    /// All values for `name`, in insertion order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Raw `k=v&k=v` text, without encoding.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Join onto a base address and encode the result.
    pub fn to_url(&self, base_url: &str) -> WcsResult<String> {
        let mut url = prepare_base_url(base_url)?;
        url.push_str(&self.to_query_string());
        Ok(encode_uri(&url))
    }
}
