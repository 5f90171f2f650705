// Unit tests focus on pure validation of submitted group data

use group_sanitizer::error::AppError;
use group_sanitizer::{
    GroupCategory, GroupInput, GroupPrivacy, GroupVerdict, ValidationError,
    sanitize_and_validate_group, validate_group_category, validate_group_description,
    validate_group_name, validate_group_privacy,
};
use serde_json::json;

#[test]
fn validate_group_name_rules() {
    let err = validate_group_name(Some("ab")).unwrap_err();
    assert_eq!(err.to_string(), "Group name must be at least 3 characters");

    let err = validate_group_name(Some(&"a".repeat(61))).unwrap_err();
    assert_eq!(err.to_string(), "Group name must be at most 60 characters");

    assert!(validate_group_name(Some("Study Group-1")).is_ok());

    let err = validate_group_name(Some("Bad$Name")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Group name can only contain letters, numbers, spaces, hyphens, and underscores"
    );

    let err = validate_group_name(None).unwrap_err();
    assert_eq!(err.to_string(), "Group name is required");
}

#[test]
fn validate_group_description_rules() {
    let err = validate_group_description(Some("short")).unwrap_err();
    assert_eq!(err.to_string(), "Description must be at least 10 characters");

    let err = validate_group_description(Some(&"A".repeat(501))).unwrap_err();
    assert_eq!(err.to_string(), "Description must be at most 500 characters");

    // surrounding whitespace does not count
    assert!(validate_group_description(Some("   123456789   ")).is_err());
    assert!(validate_group_description(Some("   1234567890   ")).is_ok());
}

#[test]
fn description_length_is_utf16_units() {
    // 5 emoji = 10 UTF-16 units
    assert!(validate_group_description(Some("😀😀😀😀😀")).is_ok());
    // 250 emoji = 500 units, 251 = 502
    assert!(validate_group_description(Some(&"😀".repeat(250))).is_ok());
    assert_eq!(
        validate_group_description(Some(&"😀".repeat(251))),
        Err(ValidationError::DescriptionTooLong)
    );
}

#[test]
fn validate_category_and_privacy_rules() {
    for category in GroupCategory::ALL {
        assert!(validate_group_category(Some(category.as_str())).is_ok());
    }
    let err = validate_group_category(Some("Random")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid category");
    assert_eq!(
        validate_group_category(None).unwrap_err().to_string(),
        "Category is required"
    );

    for privacy in GroupPrivacy::ALL {
        assert!(validate_group_privacy(Some(privacy.as_str())).is_ok());
    }
    let err = validate_group_privacy(Some("secret")).unwrap_err();
    assert_eq!(err.to_string(), "Privacy must be public, private, or restricted");
    assert_eq!(
        validate_group_privacy(Some("")).unwrap_err().to_string(),
        "Privacy setting is required"
    );
}

#[test]
fn aggregate_valid_group() {
    let input = GroupInput::new(
        "My Group",
        "This is a long enough description.",
        "Coding",
        "public",
    );
    let verdict = sanitize_and_validate_group(&input);
    assert!(verdict.is_valid());
    assert!(verdict.errors().is_empty());
    let sanitized = verdict.sanitized().unwrap();
    assert_eq!(sanitized.name, "My Group");
    assert_eq!(sanitized.description, "This is a long enough description.");
    assert_eq!(sanitized.category, GroupCategory::Coding);
    assert_eq!(sanitized.privacy, GroupPrivacy::Public);
    assert_eq!(sanitized.creator_id, None);
}

#[test]
fn aggregate_reports_errors_in_field_order() {
    let verdict = sanitize_and_validate_group(&GroupInput::new("ab", "short", "X", "y"));
    assert!(!verdict.is_valid());
    assert!(verdict.sanitized().is_none());
    assert_eq!(
        verdict.error_messages(),
        vec![
            "Group name must be at least 3 characters",
            "Description must be at least 10 characters",
            "Invalid category",
            "Privacy must be public, private, or restricted",
        ]
    );
}

#[test]
fn aggregate_single_failure_returns_no_partial_data() {
    let verdict = sanitize_and_validate_group(&GroupInput::new(
        "Good Name",
        "Description that is fine",
        "Coding",
        "hidden",
    ));
    assert_eq!(
        verdict,
        GroupVerdict::Invalid(vec![ValidationError::InvalidPrivacy])
    );
}

#[test]
fn aggregate_from_json_with_passthrough() {
    let input = GroupInput::from_json_value(json!({
        "name": "  Campus Crew  ",
        "description": "  Weekly <meetups> & 'events'  ",
        "category": "College Life",
        "privacy": "restricted",
        "creatorId": "user-42",
        "banner": "",
        "icon": {"url": "https://cdn.example/icon.png"}
    }))
    .unwrap();

    let verdict = sanitize_and_validate_group(&input);
    assert_eq!(
        serde_json::to_value(&verdict).unwrap(),
        json!({
            "valid": true,
            "sanitized": {
                "name": "Campus Crew",
                "description": "Weekly &lt;meetups&gt; &amp; &#039;events&#039;",
                "category": "College Life",
                "privacy": "restricted",
                "creatorId": "user-42",
                "icon": {"url": "https://cdn.example/icon.png"}
            }
        })
    );
}

#[test]
fn aggregate_treats_non_strings_as_missing() {
    let input = GroupInput::from_json_value(json!({
        "name": 123,
        "description": false,
        "privacy": "public"
    }))
    .unwrap();
    let verdict = sanitize_and_validate_group(&input);
    assert_eq!(
        verdict.error_messages(),
        vec![
            "Group name is required",
            "Description is required",
            "Category is required",
        ]
    );
}

#[test]
fn non_object_group_data_is_rejected() {
    let err = GroupInput::from_json_str("null").unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid argument: Group data must be a JSON object"
    );
}

#[test]
fn next_line_is_not_trimmed_or_accepted_as_space() {
    // U+0085 is Unicode whitespace but browsers do not trim or match it
    assert_eq!(
        validate_group_name(Some("abc\u{0085}")),
        Err(ValidationError::NameInvalidCharacters)
    );
    assert!(validate_group_description(Some("\u{0085}123456789")).is_ok());

    let verdict = sanitize_and_validate_group(&GroupInput::new(
        "\u{0085}My Group",
        "This is a long enough description.",
        "Coding",
        "public",
    ));
    assert_eq!(
        verdict,
        GroupVerdict::Invalid(vec![ValidationError::NameInvalidCharacters])
    );
}

#[test]
fn name_accepts_browser_whitespace_inside() {
    assert!(validate_group_name(Some("My\u{2003}Group")).is_ok());
    assert!(validate_group_name(Some("My\u{feff}Group")).is_ok());
    assert!(validate_group_name(Some("My\u{00a0}Group")).is_ok());
    assert_eq!(
        validate_group_name(Some("My\u{200b}Group")),
        Err(ValidationError::NameInvalidCharacters)
    );

    let verdict = sanitize_and_validate_group(&GroupInput::new(
        "\u{feff}\u{3000}My\u{2003}Group\u{2029}",
        "This is a long enough description.",
        "Coding",
        "public",
    ));
    assert_eq!(verdict.sanitized().unwrap().name, "My\u{2003}Group");
}
