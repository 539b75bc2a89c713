// ============================================================================
// USE SESSION HOOK - Estado de sesión + acciones login / logout
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::{HttpAuthApi, LocalTokenStore};
use crate::stores::{SessionAction, SessionStore};
use crate::utils::now_epoch_seconds;
use crate::viewmodels::{LoginAttempt, LoginGate, SessionViewModel};

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseReducerHandle<SessionStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    /// El guard borró el token persistido: olvidar también la sesión en memoria
    pub fn sync_with_storage(&self) {
        if self.state.is_stale(&LocalTokenStore) {
            log::info!("🔄 Token eliminado del storage, cerrando sesión en memoria");
            self.state.dispatch(SessionAction::LoggedOut);
        }
    }
}

fn view_model(gate: &LoginGate) -> SessionViewModel<HttpAuthApi, LocalTokenStore> {
    SessionViewModel::new(HttpAuthApi::default(), LocalTokenStore, gate.clone())
}

fn navigate(navigator: &Option<Navigator>, route: Route) {
    match navigator {
        Some(navigator) => navigator.push(&route),
        None => log::error!("❌ Router no disponible, no se puede navegar a {:?}", route),
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_reducer(|| SessionStore::restore(&LocalTokenStore, now_epoch_seconds()));
    let gate = use_state(LoginGate::default);
    let navigator = use_navigator();

    let login = {
        let state = state.clone();
        let navigator = navigator.clone();
        let gate = (*gate).clone();
        Callback::from(move |(username, password): (String, String)| {
            let vm = view_model(&gate);
            if vm.is_busy() {
                log::warn!("⚠️ Login ya en curso, se ignora el envío duplicado");
                return;
            }
            state.dispatch(SessionAction::LoginStarted);

            let state = state.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.login(&username, &password).await {
                    LoginAttempt::Done(outcome) => {
                        state.dispatch(SessionAction::LoggedIn {
                            token: outcome.token,
                            user: outcome.user,
                        });
                        navigate(&navigator, outcome.destination);
                    }
                    LoginAttempt::Failed(message) => state.dispatch(SessionAction::LoginFailed(message)),
                    LoginAttempt::Ignored => {}
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        let gate = (*gate).clone();
        Callback::from(move |_| {
            let destination = view_model(&gate).logout();
            state.dispatch(SessionAction::LoggedOut);
            navigate(&navigator, destination);
        })
    };

    UseSessionHandle { state, login, logout }
}
