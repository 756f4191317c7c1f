//! Browser-side session persistence.
//!
//! Storefront users live in `localStorage` so every tab sees them (the
//! header listens to the `storage` event). The admin token lives in
//! `sessionStorage` and dies with the tab.

use web_sys::Storage;

use crate::types::{Role, Session, UserProfile};
use crate::{ADMIN_TOKEN_KEY, USER_STORAGE_KEY, USER_TOKEN_KEY};

fn local() -> Option<Storage> {
    gloo_utils::window().local_storage().ok().flatten()
}

fn session() -> Option<Storage> {
    gloo_utils::window().session_storage().ok().flatten()
}

fn read(storage: Option<Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok().flatten()
}

fn write(storage: Option<Storage>, key: &str, value: &str) {
    if let Some(storage) = storage {
        if storage.set_item(key, value).is_err() {
            log::warn!("Could not persist {}", key);
        }
    }
}

fn clear(storage: Option<Storage>, key: &str) {
    if let Some(storage) = storage {
        let _ = storage.remove_item(key);
    }
}

/// Parse a stored user profile, ignoring anything malformed.
pub fn parse_user(raw: &str) -> Option<UserProfile> {
    serde_json::from_str::<UserProfile>(raw)
        .ok()
        .filter(|u| !u.name.trim().is_empty())
}

/// Signed-in storefront user, if any.
pub fn current_user() -> Option<UserProfile> {
    read(local(), USER_STORAGE_KEY).as_deref().and_then(parse_user)
}

pub fn user_token() -> Option<String> {
    read(local(), USER_TOKEN_KEY)
}

pub fn admin_token() -> Option<String> {
    read(session(), ADMIN_TOKEN_KEY)
}

/// Persist a session returned by login or signup.
pub fn remember(session_data: &Session) {
    match session_data.role {
        Role::Admin => write(session(), ADMIN_TOKEN_KEY, &session_data.token),
        Role::User => {
            write(local(), USER_TOKEN_KEY, &session_data.token);
            if let Some(user) = &session_data.user {
                match serde_json::to_string(user) {
                    Ok(json) => write(local(), USER_STORAGE_KEY, &json),
                    Err(e) => log::warn!("Could not encode user: {}", e),
                }
            }
        }
    }
}

/// Drop the storefront user.
pub fn forget_user() {
    clear(local(), USER_STORAGE_KEY);
    clear(local(), USER_TOKEN_KEY);
}

/// Drop the admin token.
pub fn forget_admin() {
    clear(session(), ADMIN_TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let user = parse_user(
            r#"{"name":"Rahul Sharma","companyName":"Acme","mobile":"98","email":"r@a.in","location":"Noida"}"#,
        )
        .unwrap();
        assert_eq!(user.first_name(), "Rahul");

        assert!(parse_user("not json").is_none());
        assert!(parse_user(r#"{"name":"  "}"#).is_none());
    }
}
