//! Session persistence in browser local storage

use serde::{Deserialize, Serialize};
use shelf_ui::display_types::UserSession;

const STORAGE_KEY: &str = "shelf.session";

#[derive(Serialize, Deserialize)]
struct StoredSession {
    user_id: i64,
    name: String,
    email: String,
    role: String,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore the saved session, if any.
pub fn load() -> Option<UserSession> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    let stored: StoredSession = serde_json::from_str(&raw).ok()?;
    Some(UserSession {
        user_id: stored.user_id,
        name: stored.name,
        email: stored.email,
        role: stored.role,
    })
}

/// Persist the session across reloads.
pub fn save(user: &UserSession) {
    let stored = StoredSession {
        user_id: user.user_id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
    };
    if let (Some(storage), Ok(json)) = (storage(), serde_json::to_string(&stored)) {
        if storage.set_item(STORAGE_KEY, &json).is_err() {
            tracing::warn!("failed to persist session");
        }
    }
}

/// Drop the saved session on logout.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
