//! Hand-assembled JSON fragments.
//!
//! The search filter syntax wants an array of single-key objects, and write
//! bodies want booleans as quoted strings. `serde_json` produces neither from
//! plain maps, so these builders concatenate text directly. Nothing is
//! escaped: callers must validate values before passing them in.

/// `"field":["a","b"]`
pub fn json_string_array(field: &str, values: &[String]) -> String {
    let items = values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(",");
    format!("\"{}\":[{}]", field, items)
}

/// `"key":"value"`
pub fn json_key_value(key: &str, value: &str) -> String {
    format!("\"{}\":\"{}\"", key, value)
}

/// `"key":"true"` or `"key":"false"`.
///
/// The value is a quoted string, not a JSON boolean.
// TODO: confirm against the live API whether real JSON booleans are accepted.
pub fn json_key_bool(key: &str, value: bool) -> String {
    let value = if value { "true" } else { "false" };
    json_key_value(key, value)
}

/// Wrap fragments in an object: `{a,b,c}`.
pub fn json_object<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body = fragments
        .into_iter()
        .map(|f| f.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", body)
}

/// Search body matching users by email.
pub fn email_filter(email: &str) -> Vec<u8> {
    format!("{{\"filter\": [{{\"email\" : \"{}\"}}]}}", email).into_bytes()
}
