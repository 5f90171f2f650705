use serde_json::Value;

/// HTML 转义
///
/// Replaces `& < > " '` with `&amp; &lt; &gt; &quot; &#039;`. Every other
/// character, newlines included, is copied as-is. `None` yields an empty
/// string.
pub fn escape_html<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a string JSON value; any other JSON value yields an empty string.
pub fn escape_json_value(value: &Value) -> String {
    escape_html(value.as_str())
}

/// Sanitizes free text for HTML output.
///
/// Currently identical to [`escape_html`]. Line breaks are left alone.
pub fn sanitize_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    escape_html(text)
}
