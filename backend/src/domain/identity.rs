//! Caller identity asserted by the auth gateway.
//!
//! The service never verifies credentials. An upstream gateway authenticates
//! requests and asserts the caller as an id/role pair; the inbound adapter
//! extracts that pair and the domain treats it as ground truth.

use serde::Serialize;
use uuid::Uuid;

/// Opaque identifier of an authenticated caller.
///
/// Equality is exact id equality; the gate and the vote toggles never
/// interpret the value beyond comparing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallerId(Uuid);

impl CallerId {
    /// Wrap an already-parsed UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse from the wire representation.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CallerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Role asserted by the gateway alongside the caller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    /// Wire representation used in the role header.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }

    /// All recognised roles, for error messages.
    pub const ALL: [Role; 3] = [Self::Student, Self::Faculty, Self::Admin];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError;

impl std::fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "role must be one of student, faculty or admin")
    }
}

impl std::error::Error for ParseRoleError {}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| s.eq_ignore_ascii_case(role.as_str()))
            .ok_or(ParseRoleError)
    }
}

/// Authenticated caller as seen by every protected operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: CallerId,
    pub role: Role,
}

impl Caller {
    pub fn new(id: CallerId, role: Role) -> Self {
        Self { id, role }
    }

    /// True when the gateway asserted the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn caller_id_round_trips_through_display() {
        let id = CallerId::new(Uuid::nil());
        let parsed = CallerId::parse(&id.to_string()).expect("valid uuid");
        assert_eq!(parsed, id);
    }

    #[test]
    fn caller_id_rejects_garbage() {
        assert!(CallerId::parse("not-a-uuid").is_err());
    }

    #[rstest]
    #[case("student", Role::Student)]
    #[case("faculty", Role::Faculty)]
    #[case("admin", Role::Admin)]
    #[case("ADMIN", Role::Admin)]
    fn role_parses_known_values(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>().expect("role parses"), expected);
    }

    #[rstest]
    #[case("")]
    #[case("root")]
    #[case("faculty ")]
    fn role_rejects_unknown_values(#[case] raw: &str) {
        assert!(raw.parse::<Role>().is_err());
    }

    #[test]
    fn caller_id_serialises_as_bare_uuid_string() {
        let id = CallerId::new(Uuid::nil());
        let json = serde_json::to_value(&id).expect("serialises");
        assert_eq!(json, serde_json::json!("00000000-0000-0000-0000-000000000000"));
    }
}
