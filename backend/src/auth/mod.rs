//! Storefront accounts and bearer-token sessions.
//!
//! Users sign up with a salted SHA-256 password hash stored under
//! `marketplaceUsers`. The admin portal account comes from configuration
//! only. Sessions are opaque tokens kept in memory, so a restart signs
//! everyone out. A token stops working [`SESSION_TTL_HOURS`] after it was
//! issued.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::AdminCredentials;
use crate::error::{AuthError, AuthResult, StoreError};
use crate::models::{User, UserProfile};
use crate::store::{JsonStore, StorageKey};
use crate::validation::{validate_form, FormSchema};

/// Lifetime of a bearer token
pub const SESSION_TTL_HOURS: i64 = 12;

/// Who a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// A signed-in browser
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub role: Role,
    /// Present for storefront users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    fn new(role: Role, user: Option<UserProfile>) -> Self {
        Self {
            token: uuid::Uuid::new_v4().simple().to_string(),
            role,
            user,
            issued_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.issued_at >= ttl
    }
}

/// Signup form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub name: String,
    pub company_name: String,
    pub mobile: String,
    pub email: String,
    pub location: String,
    pub password: String,
}

/// Login form, shared by the storefront and the admin portal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// In-memory token table
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a session, dropping any that have expired
    pub fn insert(&self, session: Session) -> AuthResult<Session> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let now = Utc::now();
        sessions.retain(|_, s| !s.is_expired(self.ttl, now));
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Live session for `token`; expired ones read as absent
    pub fn get(&self, token: &str) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.read().map_err(|_| StoreError::LockPoisoned)?;
        let now = Utc::now();
        Ok(sessions
            .get(token)
            .filter(|s| !s.is_expired(self.ttl, now))
            .cloned())
    }

    pub fn count(&self) -> AuthResult<usize> {
        Ok(self
            .sessions
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .len())
    }

    pub fn remove(&self, token: &str) -> AuthResult<bool> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(sessions.remove(token).is_some())
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Hex SHA-256 of `salt || password`
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Account operations and session bookkeeping
pub struct Accounts {
    store: Arc<JsonStore>,
    admin: Option<AdminCredentials>,
    demo_bypass: bool,
    sessions: SessionStore,
}

impl Accounts {
    pub fn new(store: Arc<JsonStore>, admin: Option<AdminCredentials>, demo_bypass: bool) -> Self {
        Self {
            store,
            admin,
            demo_bypass,
            sessions: SessionStore::default(),
        }
    }

    fn users(&self) -> AuthResult<Vec<User>> {
        Ok(self.store.load(StorageKey::Users)?.unwrap_or_default())
    }

    fn is_admin(&self, email: &str, password: &str) -> bool {
        self.admin
            .as_ref()
            .is_some_and(|admin| admin.email == email && admin.password == password)
    }

    /// Create a storefront account and sign it in
    pub fn signup(&self, form: SignupForm) -> AuthResult<Session> {
        validate_form(FormSchema::Signup, &form)?;

        let email = normalize_email(&form.email);
        let salt = uuid::Uuid::new_v4().simple().to_string();
        let user = User {
            name: form.name.trim().to_string(),
            company_name: form.company_name.trim().to_string(),
            mobile: form.mobile.trim().to_string(),
            email: email.clone(),
            location: form.location.trim().to_string(),
            password_hash: hash_password(&salt, &form.password),
            salt,
        };
        let profile = UserProfile::from(&user);

        self.store
            .update(StorageKey::Users, Vec::new, |users: &mut Vec<User>| {
                if users.iter().any(|u| normalize_email(&u.email) == email) {
                    return Err(AuthError::EmailTaken);
                }
                users.push(user);
                Ok(())
            })?;

        info!(email = %email, "user signed up");
        self.sessions.insert(Session::new(Role::User, Some(profile)))
    }

    /// Storefront login; the admin account signs in here as well
    pub fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        let email = normalize_email(email);
        if self.is_admin(&email, password) {
            info!("admin signed in through storefront login");
            return self.sessions.insert(Session::new(Role::Admin, None));
        }

        let user = self
            .users()?
            .into_iter()
            .find(|u| normalize_email(&u.email) == email && hash_password(&u.salt, password) == u.password_hash)
            .ok_or_else(|| {
                warn!(email = %email, "failed login");
                AuthError::InvalidCredentials
            })?;

        self.sessions
            .insert(Session::new(Role::User, Some(UserProfile::from(&user))))
    }

    /// Admin portal login
    pub fn admin_login(&self, email: &str, password: &str) -> AuthResult<Session> {
        if !self.is_admin(&normalize_email(email), password) {
            warn!("failed admin login");
            return Err(AuthError::InvalidAdminCredentials);
        }
        info!("admin signed in");
        self.sessions.insert(Session::new(Role::Admin, None))
    }

    /// Quick admin access for demos, off unless configured
    pub fn demo_admin(&self) -> AuthResult<Session> {
        if !self.demo_bypass {
            return Err(AuthError::DemoDisabled);
        }
        warn!("demo admin bypass used");
        self.sessions.insert(Session::new(Role::Admin, None))
    }

    pub fn logout(&self, token: &str) -> AuthResult<bool> {
        self.sessions.remove(token)
    }

    /// Session for `token`, if any
    pub fn session(&self, token: &str) -> AuthResult<Session> {
        self.sessions.get(token)?.ok_or(AuthError::Unauthorized)
    }

    /// Session for `token`, which must be an admin session
    pub fn require_admin(&self, token: &str) -> AuthResult<Session> {
        let session = self.session(token)?;
        if session.is_admin() {
            Ok(session)
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn accounts(demo: bool) -> (TempDir, Accounts) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        let admin = AdminCredentials {
            email: "admin@bantconfirm.com".into(),
            password: "s3cret".into(),
        };
        (dir, Accounts::new(store, Some(admin), demo))
    }

    fn form(email: &str) -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            company_name: String::new(),
            mobile: "9123456780".into(),
            email: email.into(),
            location: "Pune".into(),
            password: "hunter22".into(),
        }
    }

    #[test]
    fn test_hash_is_salted() {
        assert_ne!(hash_password("a", "pw"), hash_password("b", "pw"));
        assert_eq!(hash_password("a", "pw").len(), 64);
    }

    #[test]
    fn test_signup_then_login() {
        let (_dir, accounts) = accounts(false);
        let session = accounts.signup(form("Asha@Foods.in")).unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user.as_ref().unwrap().email, "asha@foods.in");

        let again = accounts.login(" asha@foods.in ", "hunter22").unwrap();
        assert_eq!(again.user.unwrap().name, "Asha Rao");

        let err = accounts.login("asha@foods.in", "wrong").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password.");
    }

    #[test]
    fn test_password_not_stored_in_plaintext() {
        let (dir, accounts) = accounts(false);
        accounts.signup(form("asha@foods.in")).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("marketplaceUsers.json")).unwrap();
        assert!(!raw.contains("hunter22"));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let (_dir, accounts) = accounts(false);
        accounts.signup(form("asha@foods.in")).unwrap();
        let err = accounts.signup(form("ASHA@foods.in")).unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[test]
    fn test_signup_requires_fields() {
        let (_dir, accounts) = accounts(false);
        let mut incomplete = form("asha@foods.in");
        incomplete.location = String::new();
        assert!(matches!(accounts.signup(incomplete), Err(AuthError::Validation(_))));
    }

    #[test]
    fn test_admin_login_paths() {
        let (_dir, accounts) = accounts(false);
        let session = accounts.admin_login("Admin@BantConfirm.com", "s3cret").unwrap();
        assert!(accounts.require_admin(&session.token).is_ok());

        let storefront = accounts.login("admin@bantconfirm.com", "s3cret").unwrap();
        assert!(storefront.is_admin());

        let err = accounts.admin_login("admin@bantconfirm.com", "nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid business credentials.");
    }

    #[test]
    fn test_user_session_is_not_admin() {
        let (_dir, accounts) = accounts(false);
        let session = accounts.signup(form("asha@foods.in")).unwrap();
        assert!(matches!(accounts.require_admin(&session.token), Err(AuthError::Forbidden)));
        assert!(matches!(accounts.require_admin("bogus"), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn test_demo_bypass_and_logout() {
        let (_dir, disabled) = accounts(false);
        assert!(matches!(disabled.demo_admin(), Err(AuthError::DemoDisabled)));

        let (_dir, enabled) = accounts(true);
        let session = enabled.demo_admin().unwrap();
        assert!(enabled.logout(&session.token).unwrap());
        assert!(enabled.session(&session.token).is_err());
    }

    #[test]
    fn test_session_carries_issue_time() {
        let (_dir, accounts) = accounts(false);
        let session = accounts.admin_login("admin@bantconfirm.com", "s3cret").unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert!(json["issuedAt"].is_string());
        assert!(Utc::now() - session.issued_at < Duration::minutes(1));
    }

    #[test]
    fn test_expired_sessions_are_absent_and_pruned() {
        let store = SessionStore::default();
        let mut stale = Session::new(Role::Admin, None);
        stale.issued_at = Utc::now() - Duration::hours(SESSION_TTL_HOURS + 1);
        let token = stale.token.clone();
        store.sessions.write().unwrap().insert(token.clone(), stale);

        assert!(store.get(&token).unwrap().is_none());

        let fresh = store.insert(Session::new(Role::Admin, None)).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        assert!(store.get(&fresh.token).unwrap().is_some());
    }

    #[test]
    fn test_admin_token_expires() {
        let (_dir, mut accounts) = accounts(false);
        accounts.sessions = SessionStore::with_ttl(Duration::zero());
        let session = accounts.admin_login("admin@bantconfirm.com", "s3cret").unwrap();
        assert!(matches!(
            accounts.require_admin(&session.token),
            Err(AuthError::Unauthorized)
        ));
    }
}
