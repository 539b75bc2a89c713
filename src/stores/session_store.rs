// ============================================================================
// SESSION STORE - Estado de sesión en memoria (use_reducer)
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::User;
use crate::services::TokenStore;
use crate::utils::decode_claims;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionStore {
    pub token: Option<String>,
    pub user: Option<User>,
    pub error: Option<String>,
    pub pending: bool,
}

pub enum SessionAction {
    LoginStarted,
    LoggedIn { token: String, user: User },
    LoginFailed(String),
    LoggedOut,
}

impl SessionStore {
    /// Reconstruye la sesión desde el token persistido. Un token inválido
    /// o expirado se elimina.
    pub fn restore(store: &impl TokenStore, now: i64) -> Self {
        let Some(token) = store.get() else {
            return Self::default();
        };

        match decode_claims(&token) {
            Ok(claims) if !claims.is_expired(now) => {
                log::info!("💾 Sesión restaurada para {}", claims.sub);
                Self {
                    user: Some(User::from(&claims)),
                    token: Some(token),
                    ..Self::default()
                }
            }
            Ok(_) => {
                log::info!("⌛ Token guardado expirado, se elimina");
                store.clear();
                Self::default()
            }
            Err(e) => {
                log::warn!("⚠️ Token guardado inválido, se elimina: {}", e);
                store.clear();
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map_or(false, User::is_admin)
    }

    /// Hay sesión en memoria pero el token persistido ya no existe
    pub fn is_stale(&self, store: &impl TokenStore) -> bool {
        self.is_authenticated() && store.get().is_none()
    }
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::LoginStarted => Self {
                error: None,
                pending: true,
                ..(*self).clone()
            },
            SessionAction::LoggedIn { token, user } => Self {
                token: Some(token),
                user: Some(user),
                error: None,
                pending: false,
            },
            SessionAction::LoginFailed(message) => Self {
                error: Some(message),
                pending: false,
                ..(*self).clone()
            },
            SessionAction::LoggedOut => Self::default(),
        };
        Rc::new(next)
    }
}
