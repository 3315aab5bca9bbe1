//! Session flag persisted in browser localStorage

use gloo_storage::{LocalStorage, Storage};

/// Storage key other pages of the portal look for
pub const SESSION_KEY: &str = "logged_in";
const SESSION_ACTIVE: &str = "true";

/// Where the logged-in marker lives
pub trait SessionStore {
    /// Mark the browser as logged in
    fn begin(&self);
    /// Forget the login
    fn end(&self);
    fn is_active(&self) -> bool;
}

/// Session kept in localStorage as the raw string `"true"`.
///
/// Written through the raw `web_sys::Storage` handle because gloo's typed
/// setters JSON-encode values, which would store `"\"true\""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn begin(&self) {
        if let Err(e) = LocalStorage::raw().set_item(SESSION_KEY, SESSION_ACTIVE) {
            log::error!("Failed to store session flag: {:?}", e);
        }
    }

    fn end(&self) {
        LocalStorage::delete(SESSION_KEY);
    }

    fn is_active(&self) -> bool {
        matches!(
            LocalStorage::raw().get_item(SESSION_KEY),
            Ok(Some(value)) if value == SESSION_ACTIVE
        )
    }
}

/// In-memory session for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: std::cell::RefCell<Option<String>>,
    writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of begin/end calls seen
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn begin(&self) {
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = Some(SESSION_ACTIVE.to_string());
    }

    fn end(&self) {
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = None;
    }

    fn is_active(&self) -> bool {
        self.value.borrow().as_deref() == Some(SESSION_ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_lifecycle() {
        let session = MemorySessionStore::default();
        assert!(!session.is_active());

        session.begin();
        assert!(session.is_active());
        assert_eq!(session.value().as_deref(), Some("true"));

        session.end();
        assert!(!session.is_active());
        assert_eq!(session.value(), None);
        assert_eq!(session.writes(), 2);
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_local_session_stores_raw_flag() {
            let session = LocalSessionStore;

            session.begin();
            assert_eq!(
                LocalStorage::raw().get_item(SESSION_KEY),
                Ok(Some("true".to_string()))
            );
            assert!(session.is_active());

            session.end();
            assert_eq!(LocalStorage::raw().get_item(SESSION_KEY), Ok(None));
            assert!(!session.is_active());
        }

        #[wasm_bindgen_test]
        fn test_json_encoded_flag_is_not_a_session() {
            LocalStorage::raw()
                .set_item(SESSION_KEY, "\"true\"")
                .unwrap();
            assert!(!LocalSessionStore.is_active());

            LocalSessionStore.end();
        }
    }
}
