use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let Some(session) = use_session_context() else {
        return html! {};
    };

    let identity = session
        .state
        .user
        .as_ref()
        .map(|user| format!("{} ({})", user.id, user.role))
        .unwrap_or_default();

    html! {
        <header class="app-header">
            <span class="app-title">{"🛡️ Sentinel"}</span>
            <nav class="app-nav">
                <Link<Route> to={Route::Home}>{"Dashboard"}</Link<Route>>
                if session.is_admin() {
                    <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
                }
            </nav>
            if session.is_authenticated() {
                <span class="app-user">{identity}</span>
                <button class="btn-logout" onclick={session.logout.reform(|_| ())}>
                    {"Log out"}
                </button>
            }
        </header>
    }
}
