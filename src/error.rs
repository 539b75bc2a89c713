// ============================================================================
// ERRORS - Errores de autenticación / API
// ============================================================================

use thiserror::Error;

/// Mensaje mostrado cuando el backend no da un `detail`
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },

    #[error("unauthorized (HTTP {0})")]
    Unauthorized(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Mensaje visible para el usuario. Solo el `detail` del servidor pasa tal cual,
    /// todo lo demás colapsa en el mensaje genérico.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Http { detail: Some(detail), .. } => detail.clone(),
            _ => LOGIN_FAILED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_detail_is_shown_to_user() {
        let err = AuthError::Http { status: 400, detail: Some("Incorrect email or password".into()) };
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn everything_else_collapses_to_generic_message() {
        let errors = [
            AuthError::Network("connection refused".into()),
            AuthError::Http { status: 500, detail: None },
            AuthError::MalformedResponse("missing field `access_token`".into()),
            AuthError::InvalidToken("not a JWT".into()),
            AuthError::Storage("quota exceeded".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), LOGIN_FAILED);
        }
    }

    #[test]
    fn display_keeps_cause_for_logs() {
        let err = AuthError::Http { status: 401, detail: None };
        assert_eq!(err.to_string(), "HTTP 401: no detail");
    }
}
