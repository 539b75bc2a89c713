// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE LOGIN / LOGOUT
// ============================================================================
// Devuelve valores, el hook actualiza el estado y navega
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::User;
use crate::router::Route;
use crate::services::{AuthApi, TokenStore};
use crate::utils::decode_claims;

/// Resultado de un login correcto
#[derive(Clone, Debug, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
    pub destination: Route,
}

/// Resultado de un intento de login
#[derive(Clone, Debug, PartialEq)]
pub enum LoginAttempt {
    Done(LoginOutcome),
    Failed(String),
    /// Ya había un login en curso
    Ignored,
}

/// Marca de login en curso, compartida entre instancias del viewmodel
#[derive(Clone, Debug, Default)]
pub struct LoginGate(Rc<Cell<bool>>);

impl LoginGate {
    pub fn is_busy(&self) -> bool {
        self.0.get()
    }

    fn acquire(&self) -> Option<GateRelease> {
        if self.0.replace(true) {
            return None;
        }
        Some(GateRelease(self.0.clone()))
    }
}

// Libera la marca al terminar, también si el login falla
struct GateRelease(Rc<Cell<bool>>);

impl Drop for GateRelease {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct SessionViewModel<A, S> {
    api: A,
    store: S,
    gate: LoginGate,
}

impl<A: AuthApi, S: TokenStore> SessionViewModel<A, S> {
    pub fn new(api: A, store: S, gate: LoginGate) -> Self {
        Self { api, store, gate }
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Login contra el backend. Un segundo envío mientras el primero sigue
    /// pendiente se ignora.
    pub async fn login(&self, username: &str, password: &str) -> LoginAttempt {
        let Some(_release) = self.gate.acquire() else {
            log::warn!("⚠️ Login ya en curso, se ignora el envío duplicado");
            return LoginAttempt::Ignored;
        };

        match self.authenticate(username, password).await {
            Ok(outcome) => LoginAttempt::Done(outcome),
            Err(message) => LoginAttempt::Failed(message),
        }
    }

    // El token solo se persiste si se puede decodificar
    async fn authenticate(&self, username: &str, password: &str) -> Result<LoginOutcome, String> {
        let token = self.api.login(username, password).await.map_err(|e| {
            log::error!("❌ Error en login: {}", e);
            e.user_message()
        })?;

        let claims = decode_claims(&token).map_err(|e| {
            log::error!("❌ Token recibido no decodificable: {}", e);
            e.user_message()
        })?;

        self.store.set(&token).map_err(|e| {
            log::error!("❌ No se pudo guardar el token: {}", e);
            e.user_message()
        })?;

        let user = User::from(&claims);
        let destination = Route::landing_for(user.is_admin());
        log::info!("✅ Login exitoso: {} ({})", user.id, user.role);

        Ok(LoginOutcome { token, user, destination })
    }

    /// Borra el token persistido. Siempre termina en login.
    pub fn logout(&self) -> Route {
        self.store.clear();
        log::info!("👋 Logout");
        Route::Login
    }
}
