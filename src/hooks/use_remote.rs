// ============================================================================
// USE REMOTE - Carga autenticada de datos para los dashboards
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::error::AuthError;
use crate::hooks::UseSessionHandle;
use crate::services::ApiClient;

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Qué hacer con la respuesta de un endpoint autenticado
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteOutcome<T> {
    Ready(T),
    /// El token ya no vale (401/403): cerrar sesión
    Logout(u16),
    Failed(String),
}

impl<T> From<Result<T, AuthError>> for RemoteOutcome<T> {
    fn from(result: Result<T, AuthError>) -> Self {
        match result {
            Ok(data) => RemoteOutcome::Ready(data),
            Err(AuthError::Unauthorized(status)) => RemoteOutcome::Logout(status),
            Err(e) => RemoteOutcome::Failed(e.to_string()),
        }
    }
}

/// Lanza `fetch` con el token actual. Un 401/403 cierra la sesión.
#[hook]
pub fn use_remote<T, F, Fut>(session: &UseSessionHandle, fetch: F) -> UseStateHandle<Remote<T>>
where
    T: 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, AuthError>> + 'static,
{
    let remote = use_state(|| Remote::Loading);
    let token = session.state.token.clone();

    {
        let remote = remote.clone();
        let logout = session.logout.clone();
        use_effect_with(token, move |token| {
            match token.clone() {
                Some(token) => {
                    remote.set(Remote::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        match RemoteOutcome::from(fetch(ApiClient::new(&token)).await) {
                            RemoteOutcome::Ready(data) => remote.set(Remote::Ready(data)),
                            RemoteOutcome::Logout(status) => {
                                log::warn!("⚠️ API respondió {}, cerrando sesión", status);
                                logout.emit(());
                            }
                            RemoteOutcome::Failed(message) => {
                                log::error!("❌ Error cargando datos: {}", message);
                                remote.set(Remote::Failed(message));
                            }
                        }
                    });
                }
                None => remote.set(Remote::Failed("Not signed in".to_string())),
            }
            || ()
        });
    }

    remote
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStats;

    #[test]
    fn rejected_token_logs_out() {
        for status in [401, 403] {
            let outcome = RemoteOutcome::<Vec<UserStats>>::from(Err(AuthError::Unauthorized(status)));
            assert_eq!(outcome, RemoteOutcome::Logout(status));
        }
    }

    #[test]
    fn other_errors_are_shown_without_logout() {
        let outcome = RemoteOutcome::<Vec<UserStats>>::from(Err(AuthError::Http {
            status: 500,
            detail: Some("db down".into()),
        }));
        assert_eq!(outcome, RemoteOutcome::Failed("HTTP 500: db down".into()));

        let outcome = RemoteOutcome::<Vec<UserStats>>::from(Err(AuthError::Network("offline".into())));
        assert_eq!(outcome, RemoteOutcome::Failed("network error: offline".into()));
    }

    #[test]
    fn data_is_passed_through() {
        assert_eq!(RemoteOutcome::from(Ok::<_, AuthError>(vec![1, 2])), RemoteOutcome::Ready(vec![1, 2]));
    }
}
