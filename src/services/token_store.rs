// ============================================================================
// TOKEN STORE - Persistencia del token
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::error::AuthError;
use crate::utils::STORAGE_KEY_TOKEN;

/// Dónde vive el token entre recargas
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), AuthError>;
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<(), AuthError> {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// `localStorage["token"]`, valor crudo (sin JSON)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage
            .get_item(STORAGE_KEY_TOKEN)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), AuthError> {
        let storage = Self::storage()
            .ok_or_else(|| AuthError::Storage("localStorage not available".to_string()))?;
        storage
            .set_item(STORAGE_KEY_TOKEN, token)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(STORAGE_KEY_TOKEN) {
                log::warn!("⚠️ No se pudo eliminar el token: {:?}", e);
            }
        }
    }
}

/// Almacén en memoria. Los clones comparten el mismo valor.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), AuthError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
