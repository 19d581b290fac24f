//! Users and the lightweight references posts carry to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::id::UserId;
use crate::error::ContentError;

/// Account role as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(ContentError::UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered account, as returned by `/user` and `/backoffice/authors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Case-insensitive substring match over username or email.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.username.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

/// Reference to a user embedded in a post (author, like).
///
/// The backend sends either a bare id string or a populated
/// `{ "_id": .., "username": .. }` object, depending on the endpoint.
/// Identity is the id when present, otherwise the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawUserRef")]
pub struct UserRef {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserRef {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id", default)]
        id: Option<String>,
        #[serde(default)]
        username: Option<String>,
    },
}

impl From<RawUserRef> for UserRef {
    fn from(raw: RawUserRef) -> Self {
        match raw {
            RawUserRef::Id(id) => UserRef::id(id),
            RawUserRef::Populated { id, username } => UserRef {
                id: id.filter(|id| !id.trim().is_empty()).map(UserId::new),
                username: username.filter(|name| !name.trim().is_empty()),
            },
        }
    }
}

#[derive(PartialEq, Eq, Hash)]
enum Identity<'a> {
    Id(&'a str),
    Name(Option<&'a str>),
}

impl UserRef {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(UserId::new(id)),
            username: None,
        }
    }

    pub fn named(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Some(UserId::new(id)),
            username: Some(username.into()),
        }
    }

    /// Username for display, `"Unknown"` when the reference is not populated.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Unknown")
    }

    fn identity(&self) -> Identity<'_> {
        match &self.id {
            Some(id) => Identity::Id(id.as_str()),
            None => Identity::Name(self.username.as_deref()),
        }
    }
}

impl PartialEq for UserRef {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for UserRef {}

impl Hash for UserRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        UserRef::named(user.id.as_str(), user.username.clone())
    }
}
