//! Wire DTOs for the auth and doctor endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Request payloads borrow
//! from form state so building a body never clones credentials.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login reply. Other fields the server sends are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// User identifier; the server may send it as a string or an integer.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

/// Body of `POST /api/doctor/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistrationPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    /// Empty when no specialization was chosen.
    pub specialization: &'a str,
}

/// Error reply shared by both endpoints.
///
/// Any JSON value is accepted. `message` is read from an object's `message`
/// field when it holds a truthy string, number or boolean; anything else
/// (arrays, bare strings, `null`, `0`, `false`, `""`) yields `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let message = match value.get("message") {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(serde_json::Value::Number(number)) if number.as_f64().is_some_and(|n| n != 0.0) => {
                Some(number.to_string())
            }
            Some(serde_json::Value::Bool(true)) => Some("true".to_owned()),
            _ => None,
        };
        Self { message }
    }
}

impl<'de> Deserialize<'de> for ErrorBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Medical field a doctor registers under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    General,
    Ent,
    Cardiology,
    Neurology,
    Orthopedics,
    Pediatrics,
    Other,
}

impl Specialization {
    /// Every option, in the order the select lists them.
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Ent,
        Self::Cardiology,
        Self::Neurology,
        Self::Orthopedics,
        Self::Pediatrics,
        Self::Other,
    ];

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Ent => "ent",
            Self::Cardiology => "cardiology",
            Self::Neurology => "neurology",
            Self::Orthopedics => "orthopedics",
            Self::Pediatrics => "pediatrics",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Ent => "ENT",
            Self::Cardiology => "Cardiology",
            Self::Neurology => "Neurology",
            Self::Orthopedics => "Orthopedics",
            Self::Pediatrics => "Pediatrics",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown specialization: {0}")]
pub struct UnknownSpecialization(pub String);

impl FromStr for Specialization {
    type Err = UnknownSpecialization;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str() == s)
            .ok_or_else(|| UnknownSpecialization(s.to_owned()))
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}
