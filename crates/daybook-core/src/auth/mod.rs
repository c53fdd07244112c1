//! Shared Firebase auth client logic.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::normalize_text_option;

const EXPIRY_SKEW_SECONDS: i64 = 60;
const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= unix_timestamp_now() + EXPIRY_SKEW_SECONDS
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("id_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Cloud auth is not configured for this build.")]
    NotConfigured,
    #[error("Invalid auth configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Api(String),
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> AuthResult<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> AuthResult<()>;
    fn clear_session(&self) -> AuthResult<()>;
}

/// REST client for the Firebase Identity Toolkit.
#[derive(Clone)]
pub struct FirebaseAuthClient<S: SessionPersistence> {
    identity_url: String,
    secure_token_url: String,
    api_key: String,
    client: Client,
    store: S,
}

impl<S: SessionPersistence> FirebaseAuthClient<S> {
    pub fn new(api_key: impl Into<String>, store: S) -> AuthResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Firebase API key must not be empty",
            ));
        }

        Ok(Self {
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            secure_token_url: DEFAULT_SECURE_TOKEN_URL.to_string(),
            api_key,
            client: Client::builder().build()?,
            store,
        })
    }

    /// Point the client at non-default endpoints (local auth emulator).
    #[must_use]
    pub fn with_endpoints(
        mut self,
        identity_url: impl Into<String>,
        secure_token_url: impl Into<String>,
    ) -> Self {
        self.identity_url = identity_url.into().trim_end_matches('/').to_string();
        self.secure_token_url = secure_token_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        let Some(stored_session) = self.store.load_session()? else {
            return Ok(None);
        };

        if !stored_session.is_expired() {
            return Ok(Some(stored_session));
        }

        match self.refresh_session(&stored_session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(error) => {
                tracing::warn!("Failed to refresh persisted session: {}", error);
                self.store.clear_session()?;
                Ok(None)
            }
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        validate_credentials(email, password)?;
        let session = self
            .send_identity_request("accounts:signUp", email, password)
            .await?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        validate_credentials(email, password)?;
        let session = self
            .send_identity_request("accounts:signInWithPassword", email, password)
            .await?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> AuthResult<AuthSession> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Refresh token must not be empty",
            ));
        }

        let response = self
            .client
            .post(format!("{}/token", self.secure_token_url))
            .query(&[("key", self.api_key.as_str())])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }

        let session = response.json::<SecureTokenResponse>().await?.into_session()?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    /// Drop the persisted session. The Identity Toolkit has no server-side
    /// logout; revocation is local.
    pub fn sign_out(&self) -> AuthResult<()> {
        self.store.clear_session()
    }

    async fn send_identity_request(
        &self,
        operation: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<AuthSession> {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let response = self
            .client
            .post(format!("{}/{}", self.identity_url, operation))
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }

        response.json::<IdentityAuthResponse>().await?.into_session()
    }
}

/// Resolve the optional Firebase configuration pair.
///
/// Both the API key and the project id must be present (after trimming) to
/// enable the cloud backend; neither present means the app runs signed out.
pub fn resolve_optional_firebase_config(
    api_key: Option<String>,
    project_id: Option<String>,
) -> AuthResult<Option<(String, String)>> {
    let api_key = normalize_text_option(api_key);
    let project_id = normalize_text_option(project_id);

    match (api_key, project_id) {
        (None, None) => Ok(None),
        (Some(api_key), Some(project_id)) => Ok(Some((api_key, project_id))),
        _ => Err(AuthError::NotConfigured),
    }
}

fn validate_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.trim().is_empty() {
        return Err(AuthError::Api("Email is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(AuthError::Api("Password is required".to_string()));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityAuthResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    local_id: String,
    email: Option<String>,
}

impl IdentityAuthResponse {
    fn into_session(self) -> AuthResult<AuthSession> {
        let expires_at = expiry_from_seconds(&self.expires_in)?;
        Ok(AuthSession {
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: AuthUser {
                id: self.local_id,
                email: self.email,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct SecureTokenResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    user_id: String,
}

impl SecureTokenResponse {
    fn into_session(self) -> AuthResult<AuthSession> {
        let expires_at = expiry_from_seconds(&self.expires_in)?;
        Ok(AuthSession {
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: AuthUser {
                id: self.user_id,
                email: None,
            },
        })
    }
}

/// The token endpoints report expiry as a stringified number of seconds.
fn expiry_from_seconds(expires_in: &str) -> AuthResult<i64> {
    let seconds: i64 = expires_in
        .trim()
        .parse()
        .map_err(|_| AuthError::Api("Auth response carried a malformed expiry".to_string()))?;
    Ok(unix_timestamp_now().saturating_add(seconds))
}

#[derive(Debug, Deserialize)]
struct IdentityErrorResponse {
    error: Option<IdentityErrorBody>,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBody {
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<IdentityErrorResponse>(body) {
        if let Some(message) = payload.error.and_then(|error| error.message) {
            return friendly_auth_message(&message);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

/// Map Identity Toolkit error codes onto text fit for the login screen.
///
/// The service occasionally appends detail after a colon
/// (`WEAK_PASSWORD : Password should be ...`); matching happens on the code
/// alone. Unrecognized codes pass through verbatim.
fn friendly_auth_message(code: &str) -> String {
    let bare = code.split(':').next().unwrap_or(code).trim();
    match bare {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password".to_string()
        }
        "EMAIL_EXISTS" => "An account already exists for this email".to_string(),
        "INVALID_EMAIL" => "Enter a valid email address".to_string(),
        "WEAK_PASSWORD" => "Password should be at least 6 characters".to_string(),
        "USER_DISABLED" => "This account has been disabled".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later".to_string(),
        _ => code.to_string(),
    }
}

fn unix_timestamp_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| {
            i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_response_derives_expiry_from_seconds() {
        let response = IdentityAuthResponse {
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: "3600".to_string(),
            local_id: "user".to_string(),
            email: Some("user@example.com".to_string()),
        };
        let session = response.into_session().unwrap();
        assert!(!session.is_expired());
        assert_eq!(session.user.id, "user");
        assert_eq!(session.user.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn malformed_expiry_is_an_api_error() {
        let response = IdentityAuthResponse {
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: "soon".to_string(),
            local_id: "user".to_string(),
            email: None,
        };
        assert!(matches!(
            response.into_session(),
            Err(AuthError::Api(_))
        ));
    }

    #[test]
    fn session_expiring_inside_the_skew_counts_as_expired() {
        let session = AuthSession {
            id_token: "token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: unix_timestamp_now() + EXPIRY_SKEW_SECONDS / 2,
            user: AuthUser {
                id: "user".to_string(),
                email: None,
            },
        };
        assert!(session.is_expired());
    }

    #[test]
    fn api_error_codes_map_to_friendly_messages() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND"}}"#;
        assert_eq!(
            parse_api_error(StatusCode::BAD_REQUEST, body),
            "Incorrect email or password"
        );

        let body = r#"{"error":{"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        assert_eq!(
            parse_api_error(StatusCode::BAD_REQUEST, body),
            "Password should be at least 6 characters"
        );
    }

    #[test]
    fn unknown_api_error_codes_pass_through() {
        let body = r#"{"error":{"message":"QUOTA_EXCEEDED"}}"#;
        assert_eq!(
            parse_api_error(StatusCode::BAD_REQUEST, body),
            "QUOTA_EXCEEDED"
        );
    }

    #[test]
    fn non_json_error_body_falls_back_to_status() {
        assert_eq!(parse_api_error(StatusCode::BAD_GATEWAY, "  "), "HTTP 502");
        assert_eq!(
            parse_api_error(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down (502)"
        );
    }

    #[test]
    fn session_debug_redacts_tokens() {
        let session = AuthSession {
            id_token: "secret-id-token".to_string(),
            refresh_token: "secret-refresh-token".to_string(),
            expires_at: 1_700_000_000,
            user: AuthUser {
                id: "user".to_string(),
                email: None,
            },
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-id-token"));
        assert!(!rendered.contains("secret-refresh-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert!(validate_credentials("", "password").is_err());
        assert!(validate_credentials("user@example.com", "  ").is_err());
        assert!(validate_credentials("user@example.com", "password").is_ok());
    }

    #[test]
    fn resolve_config_requires_both_values() {
        assert!(resolve_optional_firebase_config(None, None)
            .unwrap()
            .is_none());
        assert!(matches!(
            resolve_optional_firebase_config(Some("key".to_string()), None),
            Err(AuthError::NotConfigured)
        ));

        let resolved =
            resolve_optional_firebase_config(Some(" key ".to_string()), Some(" prod ".to_string()))
                .unwrap()
                .unwrap();
        assert_eq!(resolved, ("key".to_string(), "prod".to_string()));
    }
}
