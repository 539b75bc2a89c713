// ============================================================================
// API CLIENT - Requests autenticados (Bearer) contra el gateway
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::AuthError;
use crate::models::{ErrorResponse, PromptRecord, UserStats};
use crate::utils::{PROMPT_HISTORY_ENDPOINT, USERS_STATS_ENDPOINT};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(token: &str) -> Self {
        Self::with_base(CONFIG.api_base(), token)
    }

    pub fn with_base(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Historial de prompts del usuario autenticado
    pub async fn get_prompt_history(&self) -> Result<Vec<PromptRecord>, AuthError> {
        self.get_json(PROMPT_HISTORY_ENDPOINT).await
    }

    /// Estadísticas por usuario (solo admin)
    pub async fn get_users_stats(&self) -> Result<Vec<UserStats>, AuthError> {
        self.get_json(USERS_STATS_ENDPOINT).await
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::get(&url)
            .header("Authorization", &self.authorization())
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        parse_reply(status, &body)
    }
}

fn parse_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AuthError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string())),
        401 | 403 => Err(AuthError::Unauthorized(status)),
        _ => Err(AuthError::Http {
            status,
            detail: serde_json::from_str::<ErrorResponse>(body).ok().and_then(|err| err.detail),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_uses_token() {
        let client = ApiClient::with_base("http://gw/", "a.b.c");
        assert_eq!(client.authorization(), "Bearer a.b.c");
        assert_eq!(client.base_url, "http://gw");
    }

    #[test]
    fn unauthorized_statuses_are_distinguished() {
        assert_eq!(parse_reply::<Vec<UserStats>>(401, "{}"), Err(AuthError::Unauthorized(401)));
        assert_eq!(parse_reply::<Vec<UserStats>>(403, r#"{"detail": "Not enough privileges"}"#), Err(AuthError::Unauthorized(403)));
    }

    #[test]
    fn parses_stats_list() {
        let body = r#"[{"id": 2, "email": "u@example.com", "total_prompts": 5, "accepted_count": 4, "declined_count": 1}]"#;
        let stats: Vec<UserStats> = parse_reply(200, body).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].email, "u@example.com");
    }

    #[test]
    fn server_errors_keep_detail() {
        let err = parse_reply::<Vec<PromptRecord>>(500, r#"{"detail": "db down"}"#).unwrap_err();
        assert_eq!(err, AuthError::Http { status: 500, detail: Some("db down".into()) });
    }
}
