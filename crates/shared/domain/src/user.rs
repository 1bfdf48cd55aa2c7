//! User domain entity and related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::SEED_USERS;
use crate::error::{DomainError, DomainResult};

/// User identifier.
///
/// Serialized as a bare integer. Ids are intended to be unique but the store
/// does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Raw integer value
    pub fn get(self) -> i64 {
        self.0
    }

    /// Parse an identifier as it arrives in a request path.
    ///
    /// Surrounding whitespace is ignored and integral decimals such as `"1.0"`
    /// normalize to their integer value. Anything else is rejected.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(UserId(value));
        }

        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        match trimmed.parse::<f64>() {
            Ok(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Ok(UserId(value as i64))
            }
            _ => Err(DomainError::invalid_id(raw)),
        }
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// User identifier
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 1))]
    pub id: UserId,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Adrian"))]
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Replace the display name. The id never changes.
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

/// The users a fresh store starts with.
pub fn seed_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|&(id, name)| User::new(UserId(id), name))
        .collect()
}

/// Accept any JSON value as a name. Missing or null becomes `""`, strings
/// are taken as-is and other values keep their JSON text.
fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name,
        Some(other) => other.to_string(),
    })
}

/// User creation payload.
///
/// Any well-formed `name` is accepted; a missing one is stored as `""`.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// Display name
    #[serde(default, deserialize_with = "lenient_name")]
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
}

/// User update payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    #[serde(default, deserialize_with = "lenient_name")]
    #[cfg_attr(feature = "openapi", schema(example = "Adrian Updated"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(UserId::parse("1").unwrap(), UserId(1));
        assert_eq!(UserId::parse("+7").unwrap(), UserId(7));
        assert_eq!(UserId::parse("-3").unwrap(), UserId(-3));
    }

    #[test]
    fn test_parse_normalizes_whitespace_and_integral_decimals() {
        assert_eq!(UserId::parse(" 2 ").unwrap(), UserId(2));
        assert_eq!(UserId::parse("1.0").unwrap(), UserId(1));
        assert_eq!(UserId::parse("4e0").unwrap(), UserId(4));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "", "1.5", "NaN", "inf", "99999999999999999999"] {
            let err = UserId::parse(raw).unwrap_err();
            assert_eq!(err, DomainError::invalid_id(raw), "input {:?}", raw);
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert!("x".parse::<UserId>().is_err());
    }

    #[test]
    fn test_seed_users_keep_order_and_duplicate_id() {
        let users = seed_users();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0], User::new(UserId(1), "Adrian"));
        assert_eq!(users[3], User::new(UserId(4), "Richard"));
        assert_eq!(users[4], User::new(UserId(4), "Rolfi"));
    }

    #[test]
    fn test_user_serializes_as_flat_object() {
        let json = serde_json::to_value(User::new(UserId(1), "Adrian")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Adrian" }));
    }

    #[test]
    fn test_rename_keeps_id() {
        let mut user = User::new(UserId(3), "Marcos");
        user.rename("Marco".to_string());
        assert_eq!(user.id, UserId(3));
        assert_eq!(user.name, "Marco");
    }

    #[test]
    fn test_create_payload_defaults_missing_name() {
        let payload: CreateUser = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, "");
    }

    #[test]
    fn test_payload_accepts_non_string_names() {
        let null: CreateUser = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(null.name, "");

        let number: CreateUser = serde_json::from_str(r#"{"name":42}"#).unwrap();
        assert_eq!(number.name, "42");

        let flag: UpdateUser = serde_json::from_str(r#"{"name":true}"#).unwrap();
        assert_eq!(flag.name, "true");

        let text: UpdateUser = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(text.name, "Ada");
    }
}
