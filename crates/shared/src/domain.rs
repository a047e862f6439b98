use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Member identifier as carried on the wire.
///
/// The members feed sends ids as JSON strings (`"1"`); integer ids are
/// accepted as well and normalized to their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Number(u64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(value) => Self(value),
            WireId::Number(value) => Self(value.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId(id.into()),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Role text as shown in tables; the stored value is left untouched.
    pub fn display_role(&self) -> String {
        format_role(&self.role)
    }
}

/// Upper-cases the first character and keeps the rest as-is.
pub fn format_role(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
