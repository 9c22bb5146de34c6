// src/forms/urlencoded.rs
use std::collections::HashMap;

/// Decode an `application/x-www-form-urlencoded` body into a field map.
/// Later duplicates win, which is fine for our single-valued forms.
pub fn parse_form(bytes: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(bytes).into_owned().collect()
}

/// Decode a request query string ("q=foo&status=approved").
pub fn parse_query(query: &str) -> HashMap<String, String> {
    parse_form(query.as_bytes())
}

/// Build an encoded query string from key/value pairs, skipping empty values.
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        if !v.is_empty() {
            ser.append_pair(k, v);
        }
    }
    ser.finish()
}
