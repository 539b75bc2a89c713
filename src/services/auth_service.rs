use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::{ErrorResponse, LoginForm, LoginResponse};
use crate::utils::LOGIN_ENDPOINT;

/// Endpoint de login del gateway
#[async_trait(?Send)]
pub trait AuthApi {
    /// Devuelve el `access_token` emitido por el backend
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

/// Cliente HTTP real (`POST /api/v1/auth/login`)
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    login_url: String,
}

impl HttpAuthApi {
    pub fn new(api_base: &str) -> Self {
        Self {
            login_url: format!("{}{}", api_base.trim_end_matches('/'), LOGIN_ENDPOINT),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(CONFIG.api_base())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let form = LoginForm::new(username, password);

        log::info!("🔐 Login de {}", username);

        let response = Request::post(&self.login_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.to_form_body())
            .map_err(|e| AuthError::Network(format!("request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        parse_login_reply(status, &body)
    }
}

/// Interpreta la respuesta del endpoint de login
pub fn parse_login_reply(status: u16, body: &str) -> Result<String, AuthError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|err| err.detail);
        return Err(AuthError::Http { status, detail });
    }

    let reply = serde_json::from_str::<LoginResponse>(body)
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

    if reply.access_token.is_empty() {
        return Err(AuthError::MalformedResponse("empty access_token".to_string()));
    }
    Ok(reply.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_base_and_path() {
        let api = HttpAuthApi::new("http://localhost:8000/");
        assert_eq!(api.login_url(), "http://localhost:8000/api/v1/auth/login");
    }

    #[test]
    fn success_returns_access_token() {
        let token = parse_login_reply(200, r#"{"access_token": "a.b.c", "token_type": "bearer"}"#).unwrap();
        assert_eq!(token, "a.b.c");
    }

    #[test]
    fn rejection_keeps_server_detail() {
        let err = parse_login_reply(400, r#"{"detail": "Incorrect email or password"}"#).unwrap_err();
        assert_eq!(
            err,
            AuthError::Http { status: 400, detail: Some("Incorrect email or password".into()) }
        );
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn rejection_without_json_body_has_no_detail() {
        let err = parse_login_reply(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, AuthError::Http { status: 502, detail: None });
        assert_eq!(err.user_message(), "Login failed");
    }

    #[test]
    fn success_without_token_is_malformed() {
        assert!(matches!(parse_login_reply(200, r#"{"token": "x"}"#), Err(AuthError::MalformedResponse(_))));
        assert!(matches!(parse_login_reply(200, r#"{"access_token": ""}"#), Err(AuthError::MalformedResponse(_))));
    }
}
