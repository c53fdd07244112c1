//! Firebase authentication service with secure session storage.

use keyring::Entry;

use daybook_core::auth::{
    resolve_optional_firebase_config, AuthResult, FirebaseAuthClient, SessionPersistence,
};
pub use daybook_core::auth::{AuthError, AuthSession};

const KEYRING_SERVICE_NAME: &str = "daybook";
const KEYRING_SESSION_USERNAME: &str = "firebase_session";

#[derive(Debug, Clone)]
struct SessionStore {
    service_name: String,
    username: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_SESSION_USERNAME.to_string(),
        }
    }
}

impl SessionStore {
    fn entry(&self) -> AuthResult<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

impl SessionPersistence for SessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let serialized = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> AuthResult<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    inner: FirebaseAuthClient<SessionStore>,
    project_id: String,
}

impl AuthService {
    pub fn new_from_env() -> AuthResult<Option<Self>> {
        let Some((api_key, project_id)) = resolve_optional_firebase_config(
            std::env::var("FIREBASE_API_KEY").ok(),
            std::env::var("FIREBASE_PROJECT_ID").ok(),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(api_key, project_id)?))
    }

    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            inner: FirebaseAuthClient::new(api_key, SessionStore::default())?,
            project_id: project_id.into(),
        })
    }

    /// Firestore project the store client should talk to.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        self.inner.restore_session().await
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_up(email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_in(email, password).await
    }

    pub fn sign_out(&self) -> AuthResult<()> {
        self.inner.sign_out()
    }
}

#[cfg(test)]
mod tests {
    use daybook_core::auth::resolve_optional_firebase_config;

    use super::*;

    #[test]
    fn new_rejects_an_empty_api_key() {
        assert!(AuthService::new("  ", "daybook-prod").is_err());
    }

    #[test]
    fn missing_env_pair_means_no_service() {
        assert!(resolve_optional_firebase_config(None, None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn project_id_round_trips() {
        let service = AuthService::new("key", "daybook-prod").unwrap();
        assert_eq!(service.project_id(), "daybook-prod");
    }
}
