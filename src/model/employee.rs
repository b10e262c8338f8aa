use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Staff record used for booking authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    #[serde(default)]
    pub id: String,

    pub name: String,
    pub username: String,

    /// Accepted on input, never written back out.
    #[serde(skip_serializing, default)]
    pub password: String,

    pub role: String,
    pub division: String,
    pub position: String,
    pub contact: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Employee {
    /// Names of the fields a new record must carry, in declaration order.
    /// Only exactly-empty values count as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("password", &self.password),
            ("role", &self.role),
            ("division", &self.division),
            ("position", &self.position),
            ("contact", &self.contact),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Drops the stored password hash so the record can be edited and
    /// written back without hashing the hash.
    pub fn without_password(self) -> Self {
        Self {
            password: String::new(),
            ..self
        }
    }
}
