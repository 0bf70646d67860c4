//! Member identity
//!
//! The caller performing a feed operation. There is no authentication;
//! a member is whoever the embedding application says it is.

use serde::{Deserialize, Serialize};

/// Handle of the member the binary acts as when none is configured
pub const DEFAULT_MEMBER_ID: &str = "current-user";

/// Display name paired with [`DEFAULT_MEMBER_ID`]
pub const DEFAULT_MEMBER_NAME: &str = "Current User";

/// Opaque member handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Avatar reference, empty when the member has none
    pub avatar: String,
    pub is_verified: bool,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
            avatar: String::new(),
            is_verified: false,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }
}

impl Default for Member {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBER_ID, DEFAULT_MEMBER_NAME)
    }
}
