//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs carry loosely typed wire values (strings for enums and
//! timestamps); these helpers parse them into domain types with field-level
//! error details. Path ids that fail to parse resolve to 404, matching the
//! behaviour of ids that parse but match nothing.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Unwrap a required request field.
pub(crate) fn require<T>(field: &'static str, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a closed-vocabulary wire value (categories, priorities, roles).
pub(crate) fn parse_enum<T: FromStr>(
    field: &'static str,
    value: String,
    allowed: &[&str],
) -> Result<T, Error> {
    T::from_str(&value).map_err(|_| {
        Error::invalid_request(format!("{field} must be one of: {}", allowed.join(", ")))
            .with_details(json!({
                "field": field,
                "value": value,
                "code": "unknown_value",
                "allowed": allowed,
            }))
    })
}

pub(crate) fn parse_optional_enum<T: FromStr>(
    field: &'static str,
    value: Option<String>,
    allowed: &[&str],
) -> Result<Option<T>, Error> {
    value.map(|raw| parse_enum(field, raw, allowed)).transpose()
}

/// Parse a path id. Failures are indistinguishable from a missing record,
/// so the error is the resource's own not-found message.
pub(crate) fn parse_path_id(raw: &str, missing: &'static str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::not_found(missing))
}

pub(crate) fn parse_rfc3339_timestamp(
    field: &'static str,
    value: String,
) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            Error::invalid_request(format!("{field} must be an RFC 3339 timestamp"))
                .with_details(json!({
                    "field": field,
                    "value": value,
                    "code": "invalid_timestamp",
                }))
        })
}

pub(crate) fn parse_optional_rfc3339_timestamp(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, Error> {
    value
        .map(|raw| parse_rfc3339_timestamp(field, raw))
        .transpose()
}

/// Parse a `true`/`false` query value.
pub(crate) fn parse_optional_bool(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<bool>, Error> {
    value
        .map(|raw| match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(
                Error::invalid_request(format!("{field} must be true or false")).with_details(
                    json!({
                        "field": field,
                        "value": raw,
                        "code": "invalid_bool",
                    }),
                ),
            ),
        })
        .transpose()
}
