use serde::{Deserialize, Serialize};

use crate::models::User;

/// The identity snapshot kept with the session: the fields the UI needs
/// without re-fetching the user, with the role and permission names
/// flattened out of the expanded role object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UserProfile {
    /// Flatten a raw backend user into the stored snapshot.
    pub fn from_user(user: &User) -> Self {
        let role = user
            .role
            .as_ref()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        let permissions = user
            .role
            .as_ref()
            .map(|r| r.permissions.iter().map(|p| p.name.clone()).collect())
            .unwrap_or_default();

        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role,
            permissions,
            address: user.address.clone(),
            phone: user.phone.clone(),
            status: user.status.clone(),
        }
    }

    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p == name)
    }
}

/// One authenticated identity: the opaque bearer token plus the decoded
/// profile. Exactly one exists at a time per client instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }
}
