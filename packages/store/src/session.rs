//! # Session persistence
//!
//! The client persists four things between launches, each under a fixed key:
//!
//! | Key | Contents |
//! |-----|----------|
//! | `token` | Bearer token for the API |
//! | `role` | `caregiver` or `patient` |
//! | `user` | JSON-encoded [`User`] |
//! | `settings` | JSON-encoded [`NotificationSettings`] |
//!
//! There is no schema version and no migration: a value that fails to decode is
//! treated as absent. [`KeyValueStore`] is the storage seam, implemented by
//! [`crate::MemoryStore`] and [`crate::FileStore`]; [`SessionStorage`] is the typed
//! view the API client and UI use.

use crate::models::{NotificationSettings, User, UserRole};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_KEY: &str = "user";
pub const SETTINGS_KEY: &str = "settings";

/// Async string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn put(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Typed accessors over the session keys.
#[derive(Clone, Debug)]
pub struct SessionStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).await.filter(|t| !t.is_empty())
    }

    pub async fn role(&self) -> Option<UserRole> {
        let raw = self.store.get(ROLE_KEY).await?;
        UserRole::parse(raw.trim())
    }

    pub async fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable cached user: {}", e);
                None
            }
        }
    }

    /// Persist everything needed to restore a signed-in session.
    pub async fn save_session(&self, token: &str, user: &User) {
        self.store.put(TOKEN_KEY, token.to_string()).await;
        self.store
            .put(ROLE_KEY, user.role.as_str().to_string())
            .await;
        self.save_user(user).await;
    }

    pub async fn save_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.put(USER_KEY, json).await,
            Err(e) => tracing::error!("Failed to encode user for session cache: {}", e),
        }
    }

    /// Settings default to everything enabled when nothing (or garbage) is stored.
    pub async fn settings(&self) -> NotificationSettings {
        self.store
            .get(SETTINGS_KEY)
            .await
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub async fn save_settings(&self, settings: &NotificationSettings) {
        match serde_json::to_string(settings) {
            Ok(json) => self.store.put(SETTINGS_KEY, json).await,
            Err(e) => tracing::error!("Failed to encode settings: {}", e),
        }
    }

    /// Forget the signed-in session. Device settings survive.
    pub async fn clear(&self) {
        self.store.remove(TOKEN_KEY).await;
        self.store.remove(ROLE_KEY).await;
        self.store.remove(USER_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "care@example.com".into(),
            name: "Carol Giver".into(),
            role: UserRole::Caregiver,
            is_verified: true,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_save_and_restore_session() {
        let session = SessionStorage::new(MemoryStore::new());
        assert!(session.token().await.is_none());
        assert!(session.user().await.is_none());

        session.save_session("tok-123", &user()).await;

        assert_eq!(session.token().await.as_deref(), Some("tok-123"));
        assert_eq!(session.role().await, Some(UserRole::Caregiver));
        assert_eq!(session.user().await, Some(user()));
    }

    #[tokio::test]
    async fn test_clear_keeps_settings() {
        let session = SessionStorage::new(MemoryStore::new());
        session.save_session("tok", &user()).await;
        let settings = NotificationSettings {
            email_enabled: false,
            ..NotificationSettings::default()
        };
        session.save_settings(&settings).await;

        session.clear().await;

        assert!(session.token().await.is_none());
        assert!(session.role().await.is_none());
        assert!(session.user().await.is_none());
        assert_eq!(session.settings().await, settings);
    }

    #[tokio::test]
    async fn test_corrupt_values_read_as_absent() {
        let store = MemoryStore::new();
        store.put(USER_KEY, "{not json".into()).await;
        store.put(SETTINGS_KEY, "[]".into()).await;
        store.put(ROLE_KEY, "admin".into()).await;
        let session = SessionStorage::new(store);

        assert!(session.user().await.is_none());
        assert!(session.role().await.is_none());
        assert_eq!(session.settings().await, NotificationSettings::default());
    }
}
