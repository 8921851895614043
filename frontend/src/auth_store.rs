//! The one accessor over the tokens and user snapshot kept in
//! `localStorage`. Requests authenticate with the session cookie; the
//! snapshot only drives the route guard and the sidebar.

use common::model::auth::{AuthResponse, User};
use web_sys::Storage;

const ACCESS_TOKEN: &str = "accessToken";
const REFRESH_TOKEN: &str = "refreshToken";
const USER: &str = "user";

pub struct AuthStore;

impl AuthStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn save(response: &AuthResponse) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session not persisted");
            return;
        };
        storage.set_item(ACCESS_TOKEN, &response.access).ok();
        storage.set_item(REFRESH_TOKEN, &response.refresh).ok();
        if let Some(user) = &response.user {
            Self::save_user(user);
        }
    }

    pub fn save_user(user: &User) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(user) {
            Ok(json) => {
                storage.set_item(USER, &json).ok();
            }
            Err(error) => log::warn!("cannot store user snapshot: {error}"),
        }
    }

    pub fn access_token() -> Option<String> {
        Self::storage()?
            .get_item(ACCESS_TOKEN)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    pub fn user() -> Option<User> {
        let raw = Self::storage()?.get_item(USER).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    /// What the route guard checks.
    pub fn is_signed_in() -> bool {
        Self::access_token().is_some() || Self::user().is_some()
    }

    pub fn clear() {
        if let Some(storage) = Self::storage() {
            for key in [ACCESS_TOKEN, REFRESH_TOKEN, USER] {
                storage.remove_item(key).ok();
            }
        }
    }
}
