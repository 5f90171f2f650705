// Escaping is checked character by character against the entity table

use group_sanitizer::{escape_html, escape_json_value, sanitize_text};
use serde_json::json;

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

fn expected(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            ENTITIES
                .iter()
                .find(|(special, _)| *special == c)
                .map(|(_, entity)| entity.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

#[test]
fn escaped_output_has_no_raw_specials_except_entity_ampersands() {
    let samples = [
        "<script>alert('xss')</script>",
        "a & b && c",
        "\"quoted\" and 'single'",
        "<<>>&&\"\"''",
        "plain text stays plain",
    ];
    for sample in samples {
        let escaped = escape_html(sample);
        assert_eq!(escaped, expected(sample));
        assert!(!escaped.contains(['<', '>', '"', '\'']));
        // every '&' left must start one of the five entities
        for (idx, _) in escaped.match_indices('&') {
            let rest = &escaped[idx..];
            assert!(ENTITIES.iter().any(|(_, entity)| rest.starts_with(entity)));
        }
    }
}

#[test]
fn missing_and_non_string_values_escape_to_empty() {
    assert_eq!(escape_html(None), "");
    assert_eq!(escape_json_value(&json!(null)), "");
    assert_eq!(escape_json_value(&json!(42)), "");
    assert_eq!(escape_json_value(&json!({"a": "<"})), "");
}

#[test]
fn sanitize_text_keeps_newlines() {
    assert_eq!(sanitize_text("one\ntwo <3"), "one\ntwo &lt;3");
}
