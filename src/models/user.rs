use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_SORT};

/// A named permission attached to a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permission {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Full user record as the backend returns it, role expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Registration payload for `/user/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub active: Option<bool>,
    pub page: u32,
    pub limit: u32,
    pub sort: String,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            active: Some(true),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl UserListQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(active) = self.active {
            pairs.push(("active".to_string(), active.to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs.push(("sort".to_string(), self.sort.clone()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_expanded_role() {
        let body = r#"{
            "_id": "64a1",
            "name": "Jordan",
            "email": "jordan@example.com",
            "role": {
                "name": "admin",
                "permissions": [{"name": "manage_users"}, {"name": "manage_invoices"}]
            },
            "status": "active"
        }"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, "64a1");
        let role = user.role.unwrap();
        assert_eq!(role.name, "admin");
        assert_eq!(role.permissions.len(), 2);
        assert_eq!(role.permissions[0].name, "manage_users");
    }

    #[test]
    fn test_user_list_query_defaults() {
        let pairs = UserListQuery::default().to_query();
        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("sort".to_string(), "-createdAt".to_string()),
            ]
        );
    }
}
