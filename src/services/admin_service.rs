use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::api_clients::portal_client::PortalClient;
use crate::api_clients::request::RequestDescriptor;
use crate::error::AppResult;
use crate::models::{Pagination, Permission, Role, User, UserListQuery};

/// One page of the admin user listing.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub results: Option<u64>,
    pub pagination: Option<Pagination>,
}

/// Administrative reads and the grade update.
#[derive(Debug)]
pub struct AdminService {
    client: Arc<PortalClient>,
}

impl AdminService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    pub async fn list_users(&self, query: &UserListQuery) -> AppResult<UserPage> {
        debug!("Listing users: {:?}", query);
        let descriptor = RequestDescriptor::get("/admin/users").queries(query.to_query());
        let envelope = self.client.request(descriptor).await?;

        Ok(UserPage {
            users: envelope.field("users")?,
            results: envelope.results,
            pagination: envelope.pagination()?,
        })
    }

    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let envelope = self.client.get("/admin/roles", &[]).await?;
        envelope.field("roles")
    }

    pub async fn list_permissions(&self) -> AppResult<Vec<Permission>> {
        let envelope = self.client.get("/admin/permissions", &[]).await?;
        envelope.field("permissions")
    }

    /// Record marks for a user. Returns the server's confirmation message
    /// when it sends one.
    pub async fn update_grade(&self, user_id: &str, marks: f64) -> AppResult<Option<String>> {
        debug!("Updating grade for {}: {}", user_id, marks);
        let envelope = self
            .client
            .put(
                &format!("/admin/grade/users/{}", user_id),
                Some(json!({"marks": marks})),
            )
            .await?;
        Ok(envelope.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session_storage::MemoryStorage;
    use crate::auth::{Session, SessionManager, UserProfile};
    use crate::config::RuntimeConfig;
    use pretty_assertions::assert_eq;

    async fn service_for(server_url: &str) -> AdminService {
        let config = RuntimeConfig::with_server_url(server_url);
        let sessions = Arc::new(SessionManager::new(Arc::new(MemoryStorage::default())));
        sessions
            .set(Session::new(
                "tok",
                UserProfile {
                    id: "admin1".to_string(),
                    name: "Admin".to_string(),
                    email: "admin@example.com".to_string(),
                    role: "admin".to_string(),
                    permissions: vec![],
                    address: None,
                    phone: None,
                    status: None,
                },
            ))
            .await;
        let client = Arc::new(PortalClient::new(&config, sessions).unwrap());
        AdminService::new(client)
    }

    #[tokio::test]
    async fn test_list_users_decodes_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/users?active=true&page=1&limit=10&sort=-createdAt")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_body(
                r#"{
                    "status": "success",
                    "results": 23,
                    "data": {
                        "users": [{"_id": "u1", "name": "A", "email": "a@x.y"}],
                        "pagination": {"total": 23, "pages": 3}
                    }
                }"#,
            )
            .create_async()
            .await;

        let admin = service_for(&server.url()).await;
        let page = admin.list_users(&UserListQuery::default()).await.unwrap();

        assert_eq!(page.users.len(), 1);
        assert_eq!(page.results, Some(23));
        assert_eq!(page.pagination.unwrap().pages, 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_grade_returns_confirmation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/admin/grade/users/u9")
            .match_body(mockito::Matcher::Json(json!({"marks": 87.5})))
            .with_status(200)
            .with_body(r#"{"status": "success", "message": "Grade updated"}"#)
            .create_async()
            .await;

        let admin = service_for(&server.url()).await;
        let message = admin.update_grade("u9", 87.5).await.unwrap();
        assert_eq!(message.as_deref(), Some("Grade updated"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_roles_decodes_permissions() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/admin/roles")
            .with_status(200)
            .with_body(
                r#"{
                    "status": "success",
                    "data": {
                        "roles": [
                            {"name": "admin", "permissions": [{"name": "manage_users"}]},
                            {"name": "student", "permissions": []}
                        ]
                    }
                }"#,
            )
            .create_async()
            .await;

        let admin = service_for(&server.url()).await;
        let roles = admin.list_roles().await.unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].permissions[0].name, "manage_users");
    }
}
