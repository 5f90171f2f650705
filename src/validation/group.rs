use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::borrow::Cow;
use tracing::{debug, trace};

use crate::models::{GroupCategory, GroupInput, GroupPrivacy, SanitizedGroup};
use crate::utils::html::escape_html;
use crate::validation::{GroupField, ValidationError, ValidationResult, rules};

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 60;
const DESCRIPTION_MIN_LEN: usize = 10;
const DESCRIPTION_MAX_LEN: usize = 500;

/// Result of [`sanitize_and_validate_group`].
#[derive(Debug, Clone, PartialEq)]
pub enum GroupVerdict {
    Valid(SanitizedGroup),
    /// Ordered name, description, category, privacy; at most one per field.
    Invalid(Vec<ValidationError>),
}

impl GroupVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, GroupVerdict::Valid(_))
    }

    pub fn sanitized(&self) -> Option<&SanitizedGroup> {
        match self {
            GroupVerdict::Valid(group) => Some(group),
            GroupVerdict::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            GroupVerdict::Valid(_) => &[],
            GroupVerdict::Invalid(errors) => errors,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}

impl Serialize for GroupVerdict {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("GroupVerdict", 2)?;
        match self {
            GroupVerdict::Valid(group) => {
                state.serialize_field("valid", &true)?;
                state.serialize_field("sanitized", group)?;
            }
            GroupVerdict::Invalid(errors) => {
                state.serialize_field("valid", &false)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

fn check_group_name(name: Option<&str>) -> Result<&str, ValidationError> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::NameRequired)?;
    let trimmed = rules::trim(name);
    let len = rules::text_length(trimmed);

    if len < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if !rules::is_valid_group_name(trimmed) {
        return Err(ValidationError::NameInvalidCharacters);
    }
    Ok(trimmed)
}

fn check_group_description(description: Option<&str>) -> Result<&str, ValidationError> {
    let description = description
        .filter(|d| !d.is_empty())
        .ok_or(ValidationError::DescriptionRequired)?;
    let trimmed = rules::trim(description);
    let len = rules::text_length(trimmed);

    if len < DESCRIPTION_MIN_LEN {
        return Err(ValidationError::DescriptionTooShort);
    }
    if len > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(trimmed)
}

fn check_group_category(category: Option<&str>) -> Result<GroupCategory, ValidationError> {
    let category = category
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::CategoryRequired)?;
    category
        .parse()
        .map_err(|_| ValidationError::InvalidCategory)
}

fn check_group_privacy(privacy: Option<&str>) -> Result<GroupPrivacy, ValidationError> {
    let privacy = privacy
        .filter(|p| !p.is_empty())
        .ok_or(ValidationError::PrivacyRequired)?;
    privacy.parse().map_err(|_| ValidationError::InvalidPrivacy)
}

pub fn validate_group_name(name: Option<&str>) -> ValidationResult {
    check_group_name(name).map(|_| ())
}

pub fn validate_group_description(description: Option<&str>) -> ValidationResult {
    check_group_description(description).map(|_| ())
}

pub fn validate_group_category(category: Option<&str>) -> ValidationResult {
    check_group_category(category).map(|_| ())
}

pub fn validate_group_privacy(privacy: Option<&str>) -> ValidationResult {
    check_group_privacy(privacy).map(|_| ())
}

/// Runs the validator for a single field.
pub fn validate_field(field: GroupField, value: Option<&str>) -> ValidationResult {
    match field {
        GroupField::Name => validate_group_name(value),
        GroupField::Description => validate_group_description(value),
        GroupField::Category => validate_group_category(value),
        GroupField::Privacy => validate_group_privacy(value),
    }
}

/// Validates every field of `input` and, only when all pass, returns the
/// sanitized group. Never fails: bad input is reported inside the verdict.
pub fn sanitize_and_validate_group(input: &GroupInput) -> GroupVerdict {
    let name = check_group_name(input.name.as_deref());
    let description = check_group_description(input.description.as_deref());
    let category = check_group_category(input.category.as_deref());
    let privacy = check_group_privacy(input.privacy.as_deref());

    match (name, description, category, privacy) {
        (Ok(name), Ok(description), Ok(category), Ok(privacy)) => {
            let (creator_id, banner, icon) = input.truthy_passthrough();
            trace!(%category, %privacy, "Group input accepted");
            GroupVerdict::Valid(SanitizedGroup {
                name: name.to_string(),
                description: escape_html(description),
                category,
                privacy,
                creator_id,
                banner,
                icon,
            })
        }
        (name, description, category, privacy) => {
            let errors: Vec<ValidationError> = [
                name.err(),
                description.err(),
                category.err(),
                privacy.err(),
            ]
            .into_iter()
            .flatten()
            .collect();

            debug!(
                error_count = errors.len(),
                fields = ?errors.iter().map(|e| e.field().as_str()).collect::<Vec<_>>(),
                "Group input rejected"
            );
            GroupVerdict::Invalid(errors)
        }
    }
}

impl validator::Validate for GroupInput {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        let GroupVerdict::Invalid(errors) = sanitize_and_validate_group(self) else {
            return Ok(());
        };

        let mut validation_errors = validator::ValidationErrors::new();
        for error in errors {
            let mut field_error = validator::ValidationError::new(error.code());
            field_error.message = Some(Cow::Owned(error.to_string()));
            validation_errors.add(error.field().as_str(), field_error);
        }
        Err(validation_errors)
    }
}
