use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::auth::session::Session;
use crate::auth::session_storage::SessionStorage;
use crate::constants::{PROFILE_KEY, TOKEN_KEY};
use crate::error::{AppError, AppResult};

/// Holder of the single process-wide session: an in-memory cache in front of
/// the storage backend, rehydrated lazily on first read.
#[derive(Debug)]
pub struct SessionManager {
    session: RwLock<Option<Session>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionManager {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            session: RwLock::new(None),
            storage,
        }
    }

    /// Current session, restoring from storage when the cache is cold.
    pub async fn get(&self) -> Option<Session> {
        let mut guard = self.session.write().await;
        if guard.is_some() {
            return guard.clone();
        }

        match self.load_from_storage().await {
            Ok(Some(session)) => {
                info!("Session restored from storage for {}", session.profile.email);
                *guard = Some(session.clone());
                Some(session)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to restore session from storage: {}. Treating as anonymous.", e);
                None
            }
        }
    }

    async fn load_from_storage(&self) -> AppResult<Option<Session>> {
        let Some(token) = self.storage.get_item(TOKEN_KEY).await? else {
            return Ok(None);
        };
        let profile_json = self
            .storage
            .get_item(PROFILE_KEY)
            .await?
            .ok_or_else(|| AppError::StorageError("token present but profile missing".to_string()))?;
        let profile = serde_json::from_str(&profile_json)
            .map_err(|e| AppError::StorageError(format!("stored profile is not valid JSON: {}", e)))?;
        Ok(Some(Session::new(token, profile)))
    }

    pub async fn token(&self) -> Option<String> {
        self.get().await.map(|s| s.token)
    }

    pub async fn profile(&self) -> Option<crate::auth::session::UserProfile> {
        self.get().await.map(|s| s.profile)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.get().await.is_some()
    }

    /// Install a new session, replacing any existing one. The in-memory copy
    /// is updated first; a persistence failure leaves the session usable for
    /// the rest of the process lifetime.
    pub async fn set(&self, session: Session) {
        {
            let mut guard = self.session.write().await;
            *guard = Some(session.clone());
        }

        match serde_json::to_string(&session.profile) {
            Ok(profile_json) => {
                if let Err(e) = self.storage.set_item(TOKEN_KEY, &session.token).await {
                    warn!("Failed to persist token: {}. Session kept in memory only.", e);
                } else if let Err(e) = self.storage.set_item(PROFILE_KEY, &profile_json).await {
                    warn!("Failed to persist profile: {}. Session kept in memory only.", e);
                } else {
                    debug!("Session persisted to storage");
                }
            }
            Err(e) => {
                warn!("Failed to serialize profile: {}. Session kept in memory only.", e);
            }
        }
    }

    /// Drop the session everywhere: memory and both storage entries. Called
    /// on logout and when the server reports the token invalid.
    pub async fn clear(&self) {
        {
            let mut guard = self.session.write().await;
            *guard = None;
        }

        if let Err(e) = self.storage.remove_item(TOKEN_KEY).await {
            warn!("Failed to remove stored token: {}", e);
        }
        if let Err(e) = self.storage.remove_item(PROFILE_KEY).await {
            warn!("Failed to remove stored profile: {}", e);
        }
        info!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::UserProfile;
    use crate::auth::session_storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Riley".to_string(),
            email: "riley@example.com".to_string(),
            role: "admin".to_string(),
            permissions: vec!["manage_users".to_string()],
            address: None,
            phone: None,
            status: Some("active".to_string()),
        }
    }

    fn manager() -> SessionManager {
        SessionManager::new(Arc::new(MemoryStorage::default()))
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let sessions = manager();
        let session = Session::new("tok-123", sample_profile());
        sessions.set(session.clone()).await;

        assert_eq!(sessions.get().await, Some(session));
        assert_eq!(sessions.token().await, Some("tok-123".to_string()));
        assert!(sessions.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_clear_returns_to_anonymous() {
        let sessions = manager();
        sessions.set(Session::new("tok-123", sample_profile())).await;
        sessions.clear().await;

        assert_eq!(sessions.get().await, None);
        assert!(!sessions.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_cold_cache_restores_from_storage() {
        let storage = Arc::new(MemoryStorage::default());
        let profile_json = serde_json::to_string(&sample_profile()).unwrap();
        storage.set_item(TOKEN_KEY, "persisted-tok").await.unwrap();
        storage.set_item(PROFILE_KEY, &profile_json).await.unwrap();

        let sessions = SessionManager::new(Arc::clone(&storage) as Arc<dyn SessionStorage>);
        let session = sessions.get().await.unwrap();
        assert_eq!(session.token, "persisted-tok");
        assert_eq!(session.profile, sample_profile());
    }

    #[tokio::test]
    async fn test_corrupt_profile_is_treated_as_anonymous() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set_item(TOKEN_KEY, "tok").await.unwrap();
        storage.set_item(PROFILE_KEY, "{not json").await.unwrap();

        let sessions = SessionManager::new(Arc::clone(&storage) as Arc<dyn SessionStorage>);
        assert_eq!(sessions.get().await, None);
    }

    #[tokio::test]
    async fn test_clear_removes_storage_entries() {
        let storage = Arc::new(MemoryStorage::default());
        let sessions = SessionManager::new(Arc::clone(&storage) as Arc<dyn SessionStorage>);
        sessions.set(Session::new("tok", sample_profile())).await;
        sessions.clear().await;

        assert_eq!(storage.get_item(TOKEN_KEY).await.unwrap(), None);
        assert_eq!(storage.get_item(PROFILE_KEY).await.unwrap(), None);
    }
}
