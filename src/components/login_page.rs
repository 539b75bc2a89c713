use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session_context;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session_context();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let validation_error = use_state(|| None::<String>);

    let Some(session) = session else {
        return html! {};
    };

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let validation_error = validation_error.clone();
        let on_login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value().trim().to_string();
                let password = password_input.value();

                if username.is_empty() || password.is_empty() {
                    validation_error.set(Some("Please fill in both fields".to_string()));
                    return;
                }

                validation_error.set(None);
                on_login.emit((username, password));
            }
        })
    };

    let pending = session.state.pending;
    let error = (*validation_error).clone().or_else(|| session.state.error.clone());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"🛡️"}</div>
                    <h1>{"Sentinel"}</h1>
                    <p>{"AI Compliance Gateway"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Email"}</label>
                        <input
                            type="email"
                            id="username"
                            name="username"
                            autocomplete="username"
                            placeholder="you@company.com"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = error {
                        <p class="login-error" role="alert">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={pending}>
                        { if pending { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
