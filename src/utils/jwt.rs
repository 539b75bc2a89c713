// ============================================================================
// JWT - Decodificación del payload (sin verificar firma)
// ============================================================================
// La firma la valida el backend en cada request. Aquí solo leemos claims
// para decidir navegación.
// ============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AuthError;
use crate::models::Claims;

/// Decodifica los claims de un token `header.payload.signature`
pub fn decode_claims(token: &str) -> Result<Claims, AuthError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("missing payload segment".to_string()))?;

    // Algunos emisores dejan el padding '=' aunque base64url no lo lleve
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("payload is not base64url: {}", e)))?;

    serde_json::from_slice::<Claims>(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("payload is not valid claims JSON: {}", e)))
}

/// Segundos desde epoch, reloj del navegador
pub fn now_epoch_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_payload_segment() {
        let token = encode_test_token(&json!({"sub": "ana@example.com", "role": "admin", "exp": 1_900_000_000}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ana@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn accepts_padded_payload() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1","role":"user","exp":5}"#);
        let token = format!("h.{}.s", body);
        assert_eq!(decode_claims(&token).unwrap().role, "user");
    }

    #[test]
    fn rejects_tokens_without_payload() {
        assert!(matches!(decode_claims("garbage"), Err(AuthError::InvalidToken(_))));
        assert!(matches!(decode_claims("a..c"), Err(AuthError::InvalidToken(_))));
        assert!(matches!(decode_claims(""), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert!(matches!(decode_claims("a.!!!.c"), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_payload_missing_claims() {
        let token = encode_test_token(&json!({"sub": "1"}));
        assert!(matches!(decode_claims(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn signature_is_not_checked() {
        let token = encode_test_token(&json!({"sub": "1", "role": "user", "exp": 5}));
        let tampered = format!("{}tampered", token);
        assert!(decode_claims(&tampered).is_ok());
    }
}
