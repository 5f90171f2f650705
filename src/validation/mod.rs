use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod group;

pub use group::{
    GroupVerdict, sanitize_and_validate_group, validate_field, validate_group_category,
    validate_group_description, validate_group_name, validate_group_privacy,
};

/// 单个字段的验证结果
pub type ValidationResult = Result<(), ValidationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupField {
    Name,
    Description,
    Category,
    Privacy,
}

impl GroupField {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::Name => "name",
            GroupField::Description => "description",
            GroupField::Category => "category",
            GroupField::Privacy => "privacy",
        }
    }
}

impl FromStr for GroupField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(GroupField::Name),
            "description" => Ok(GroupField::Description),
            "category" => Ok(GroupField::Category),
            "privacy" => Ok(GroupField::Privacy),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One variant per rule. `Display` is the message shown to end users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Group name is required")]
    NameRequired,
    #[error("Group name must be at least 3 characters")]
    NameTooShort,
    #[error("Group name must be at most 60 characters")]
    NameTooLong,
    #[error("Group name can only contain letters, numbers, spaces, hyphens, and underscores")]
    NameInvalidCharacters,

    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("Description must be at most 500 characters")]
    DescriptionTooLong,

    #[error("Category is required")]
    CategoryRequired,
    #[error("Invalid category")]
    InvalidCategory,

    #[error("Privacy setting is required")]
    PrivacyRequired,
    #[error("Privacy must be public, private, or restricted")]
    InvalidPrivacy,
}

impl ValidationError {
    pub fn field(&self) -> GroupField {
        use ValidationError::*;
        match self {
            NameRequired | NameTooShort | NameTooLong | NameInvalidCharacters => GroupField::Name,
            DescriptionRequired | DescriptionTooShort | DescriptionTooLong => {
                GroupField::Description
            }
            CategoryRequired | InvalidCategory => GroupField::Category,
            PrivacyRequired | InvalidPrivacy => GroupField::Privacy,
        }
    }

    pub fn code(&self) -> &'static str {
        use ValidationError::*;
        match self {
            NameRequired => "name_required",
            NameTooShort => "name_too_short",
            NameTooLong => "name_too_long",
            NameInvalidCharacters => "name_invalid_characters",
            DescriptionRequired => "description_required",
            DescriptionTooShort => "description_too_short",
            DescriptionTooLong => "description_too_long",
            CategoryRequired => "category_required",
            InvalidCategory => "invalid_category",
            PrivacyRequired => "privacy_required",
            InvalidPrivacy => "invalid_privacy",
        }
    }
}

// 序列化为错误消息本身
impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Wire form of a [`ValidationResult`]: `{ "valid": bool, "error"?: string }`.
///
/// Produced by `group-sanitizer field` for single-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ValidationResult> for FieldVerdict {
    fn from(result: ValidationResult) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// 常用验证规则
pub mod rules {
    use regex::Regex;
    use std::sync::OnceLock;

    static GROUP_NAME_RE: OnceLock<Regex> = OnceLock::new();

    // Unicode White_Space minus NEL, plus BOM
    fn is_js_whitespace(c: char) -> bool {
        (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
    }

    /// Strips the same leading/trailing whitespace a browser-side `trim()` would.
    pub fn trim(text: &str) -> &str {
        text.trim_matches(is_js_whitespace)
    }

    /// Length in UTF-16 code units, the unit the web form counts in.
    pub fn text_length(text: &str) -> usize {
        text.encode_utf16().count()
    }

    pub fn is_valid_group_name(name: &str) -> bool {
        GROUP_NAME_RE
            .get_or_init(|| {
                Regex::new(r"^[A-Za-z0-9\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}_-]+$")
                    .expect("failed to compile regex")
            })
            .is_match(name)
    }

}
