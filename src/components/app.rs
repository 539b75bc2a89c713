use yew::prelude::*;
use yew_router::prelude::*;

use super::{AdminPage, HomePage, LoginPage, NotFound};
use crate::hooks::{use_session_context, SessionContextProvider};
use crate::router::{before_each, GuardDecision, Route};
use crate::services::LocalTokenStore;
use crate::utils::now_epoch_seconds;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionContextProvider>
                <Switch<Route> render={switch} />
            </SessionContextProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteGuard {route} /> }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub route: Route,
}

/// Ejecuta el guard antes de montar la página de destino
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session_context();
    let route = props.route;
    let decision = before_each(&route, &LocalTokenStore, now_epoch_seconds());

    // Si el guard eliminó el token, la sesión en memoria también se cierra
    use_effect_with((route, decision), move |_| {
        if let Some(session) = session {
            session.sync_with_storage();
        }
        || ()
    });

    match decision {
        GuardDecision::Redirect(target) => {
            log::debug!("↪️ {:?} -> {:?}", route, target);
            html! { <Redirect<Route> to={target} /> }
        }
        GuardDecision::Allow => render_page(route),
    }
}

fn render_page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <HomePage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
