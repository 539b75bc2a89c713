use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::ROLE_ADMIN;

/// Cuerpo del formulario de login (`application/x-www-form-urlencoded`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// `username=...&password=...` con escape de caracteres reservados
    pub fn to_form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Cuerpo de error de la API (`{"detail": "..."}`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "detail_as_string")]
    pub detail: Option<String>,
}

/// Claims leídos del payload del token. No se verifica la firma.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Claims {
    #[serde(deserialize_with = "subject_as_string")]
    pub sub: String,
    pub role: String,
    pub exp: i64,
}

impl Claims {
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Usuario derivado de los claims en memoria
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl From<&Claims> for User {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.sub.clone(),
            role: claims.role.clone(),
        }
    }
}

// `sub` puede venir como string o como número
fn subject_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unexpected sub claim: {}", other))),
    }
}

// FastAPI devuelve `detail` como string, o como lista en errores de validación (422)
fn detail_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
