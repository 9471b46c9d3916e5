use gloo::storage::{LocalStorage, Storage};
use shared::{Session, TokenClaims};

const TOKEN_KEY: &str = "expense_console.token";
const USER_KEY: &str = "expense_console.user";

/// Persistence for the signed-in session: the bearer token and the
/// decoded user record live under two local-storage keys so a session
/// survives page reloads. All writes go through here.
pub struct SessionStore;

impl SessionStore {
    /// Restore a previously saved session. Returns None unless both
    /// keys are present and parse.
    pub fn load() -> Option<Session> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        let user: TokenClaims = LocalStorage::get(USER_KEY).ok()?;
        Some(Session { token, user })
    }

    pub fn save(session: &Session) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &session.token) {
            gloo::console::error!("Failed to persist token:", e.to_string());
        }
        if let Err(e) = LocalStorage::set(USER_KEY, &session.user) {
            gloo::console::error!("Failed to persist user:", e.to_string());
        }
    }

    /// Unconditional teardown, shared by logout and 401/403 handling.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_session() -> Session {
        Session {
            token: "header.payload.signature".to_string(),
            user: TokenClaims {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[wasm_bindgen_test]
    fn save_then_load_round_trips() {
        SessionStore::clear();
        let session = sample_session();
        SessionStore::save(&session);
        assert_eq!(SessionStore::load(), Some(session));
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_keys() {
        SessionStore::save(&sample_session());
        SessionStore::clear();
        assert!(LocalStorage::get::<String>(TOKEN_KEY).is_err());
        assert!(LocalStorage::get::<TokenClaims>(USER_KEY).is_err());
        assert_eq!(SessionStore::load(), None);
    }

    #[wasm_bindgen_test]
    fn clear_is_safe_regardless_of_prior_state() {
        SessionStore::clear();
        SessionStore::clear();
        assert_eq!(SessionStore::load(), None);
    }

    #[wasm_bindgen_test]
    fn load_requires_both_keys() {
        SessionStore::clear();
        LocalStorage::set(TOKEN_KEY, &sample_session().token).unwrap();
        assert_eq!(SessionStore::load(), None);
    }
}
