// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Se crea una vez en App (dentro del router) y vive hasta una recarga completa
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

/// Provider component que envuelve la app y proporciona el estado de sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Sesión compartida; `None` fuera de `SessionContextProvider`
#[hook]
pub fn use_session_context() -> Option<UseSessionHandle> {
    let handle = use_context::<UseSessionHandle>();
    if handle.is_none() {
        log::error!("❌ use_session_context llamado fuera de SessionContextProvider");
    }
    handle
}
