//! Field validation shared by record constructors.
//!
//! Rules live with the domain so every entry path (create and patch) applies
//! the same trimming and limits. Errors carry `{field, code}` details for
//! clients.

use serde_json::json;

use crate::domain::error::Error;

/// Trim and require a non-empty text field.
pub(crate) fn require_text(field: &str, value: String) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_request(format!("{field} is required"))
            .with_details(json!({ "field": field, "code": "required" })));
    }
    Ok(trimmed.to_owned())
}

/// Trim, require, and cap a text field at `max` characters.
pub(crate) fn bounded_text(field: &str, value: String, max: usize) -> Result<String, Error> {
    let trimmed = require_text(field, value)?;
    if trimmed.chars().count() > max {
        return Err(
            Error::invalid_request(format!("{field} cannot exceed {max} characters"))
                .with_details(json!({ "field": field, "code": "max_length", "max": max })),
        );
    }
    Ok(trimmed)
}

/// Trim an optional text field, dropping it entirely when blank.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Trim an optional text field and cap it at `max` characters when present.
pub(crate) fn optional_bounded_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, Error> {
    match optional_text(value) {
        Some(text) => Ok(Some(bounded_text(field, text, max)?)),
        None => Ok(None),
    }
}

/// Require a star rating inside `min..=max`.
pub(crate) fn bounded_rating(field: &str, value: f32, min: f32, max: f32) -> Result<f32, Error> {
    if !(min..=max).contains(&value) {
        return Err(
            Error::invalid_request(format!("{field} must be between {min} and {max}"))
                .with_details(json!({ "field": field, "code": "range", "min": min, "max": max })),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[test]
    fn require_text_trims_surrounding_whitespace() {
        let value = require_text("name", "  quiet corner  ".into()).expect("valid");
        assert_eq!(value, "quiet corner");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn require_text_rejects_blank_values(#[case] raw: &str) {
        let err = require_text("name", raw.into()).expect_err("blank is invalid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "name is required");
    }

    #[test]
    fn bounded_text_rejects_overlong_values() {
        let err = bounded_text("title", "x".repeat(151), 150).expect_err("too long");
        assert_eq!(err.message(), "title cannot exceed 150 characters");
    }

    #[test]
    fn bounded_text_counts_characters_not_bytes() {
        let value = bounded_text("title", "é".repeat(150), 150).expect("150 chars fit");
        assert_eq!(value.chars().count(), 150);
    }

    #[rstest]
    #[case(Some("  ".into()), None)]
    #[case(None, None)]
    #[case(Some(" left  ".into()), Some("left".into()))]
    fn optional_text_drops_blank_values(#[case] raw: Option<String>, #[case] expected: Option<String>) {
        assert_eq!(optional_text(raw), expected);
    }

    #[test]
    fn optional_bounded_text_accepts_blank_as_absent() {
        let value = optional_bounded_text("description", Some("   ".into()), 10).expect("valid");
        assert!(value.is_none());
    }

    #[test]
    fn optional_bounded_text_still_caps_present_values() {
        let err = optional_bounded_text("description", Some("x".repeat(11)), 10)
            .expect_err("too long");
        assert_eq!(err.message(), "description cannot exceed 10 characters");
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(5.0, true)]
    #[case(5.1, false)]
    #[case(-0.5, false)]
    fn bounded_rating_enforces_range(#[case] value: f32, #[case] ok: bool) {
        assert_eq!(bounded_rating("rating", value, 0.0, 5.0).is_ok(), ok);
    }
}
