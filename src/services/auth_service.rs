use std::sync::Arc;

use log::{debug, info};
use serde_json::json;

use crate::api_clients::portal_client::PortalClient;
use crate::api_clients::request::RequestDescriptor;
use crate::auth::{Session, SessionManager, UserProfile};
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

/// Login, registration, and session lifecycle. The only service that writes
/// the session; everything else just reads it through the client.
#[derive(Debug)]
pub struct AuthService {
    client: Arc<PortalClient>,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    pub fn new(client: Arc<PortalClient>, sessions: Arc<SessionManager>) -> Self {
        Self { client, sessions }
    }

    /// Authenticate against the portal and install the resulting session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        debug!("Logging in {}", email);
        let descriptor = RequestDescriptor::post("/admin/login")
            .public()
            .json(json!({"email": email, "password": password}));
        let envelope = self.client.request(descriptor).await?;

        let token = envelope
            .token
            .clone()
            .ok_or_else(|| AppError::DecodeError("login response has no token".to_string()))?;
        let user: User = envelope.field("user")?;
        let profile = UserProfile::from_user(&user);

        self.sessions.set(Session::new(token, profile.clone())).await;
        info!("Logged in as {} ({})", profile.name, profile.role);
        Ok(profile)
    }

    /// Create an account. The backend answers with the same token-plus-user
    /// envelope as login, so the fresh account is signed in immediately.
    pub async fn register(&self, new_user: &NewUser) -> AppResult<UserProfile> {
        debug!("Registering {}", new_user.email);
        let descriptor = RequestDescriptor::post("/user/register")
            .public()
            .json(serde_json::to_value(new_user)?);
        let envelope = self.client.request(descriptor).await?;

        let token = envelope
            .token
            .clone()
            .ok_or_else(|| AppError::DecodeError("registration response has no token".to_string()))?;
        let user: User = envelope.field("user")?;
        let profile = UserProfile::from_user(&user);

        self.sessions.set(Session::new(token, profile.clone())).await;
        info!("Registered and logged in {}", profile.email);
        Ok(profile)
    }

    /// Re-fetch the identity behind the current token.
    pub async fn whoami(&self) -> AppResult<UserProfile> {
        let envelope = self.client.get("/admin/whoami", &[]).await?;
        let user: User = envelope.field("user")?;
        Ok(UserProfile::from_user(&user))
    }

    /// Drop the session. The portal has no server-side logout; the token is
    /// simply forgotten.
    pub async fn logout(&self) {
        self.sessions.clear().await;
    }
}
