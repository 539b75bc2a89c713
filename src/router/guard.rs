// ============================================================================
// ROUTER GUARD - Se ejecuta antes de renderizar cada ruta
// ============================================================================
// Lee el token persistido (no el estado en memoria). Un token inválido o
// expirado se borra y equivale a no tener sesión.
// ============================================================================

use crate::router::{Route, RouteMeta};
use crate::services::TokenStore;
use crate::utils::decode_claims;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide si se puede navegar a `to`
pub fn before_each(to: &Route, store: &impl TokenStore, now: i64) -> GuardDecision {
    check(to, to.meta(), store, now)
}

/// `requires_admin` implica sesión aunque la ruta no marque `requires_auth`
fn check(to: &Route, meta: RouteMeta, store: &impl TokenStore, now: i64) -> GuardDecision {
    let needs_session = meta.requires_auth || meta.requires_admin;

    let Some(token) = store.get() else {
        return if needs_session {
            log::info!("🔒 Sin token, redirigiendo a login desde {:?}", to);
            redirect(to, Route::Login)
        } else {
            GuardDecision::Allow
        };
    };

    let claims = match decode_claims(&token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("⚠️ Token inválido, se elimina: {}", e);
            store.clear();
            return redirect(to, Route::Login);
        }
    };

    if claims.is_expired(now) {
        log::info!("⌛ Token expirado, se elimina");
        store.clear();
        return redirect(to, Route::Login);
    }

    if meta.requires_admin && !claims.is_admin() {
        log::warn!("⚠️ Rol '{}' sin acceso a {:?}", claims.role, to);
        return redirect(to, Route::Home);
    }

    GuardDecision::Allow
}

// Redirigir a la misma ruta sería un bucle
fn redirect(to: &Route, target: Route) -> GuardDecision {
    if *to == target {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryTokenStore;
    use crate::utils::jwt::encode_test_token;
    use serde_json::json;

    const NOW: i64 = 1_800_000_000;

    fn token(role: &str, exp: i64) -> String {
        encode_test_token(&json!({"sub": "42", "role": role, "exp": exp}))
    }

    #[test]
    fn guarded_routes_without_token_go_to_login() {
        let store = MemoryTokenStore::new();
        for route in [Route::Home, Route::Admin] {
            assert_eq!(before_each(&route, &store, NOW), GuardDecision::Redirect(Route::Login));
        }
    }

    #[test]
    fn admin_flag_alone_requires_a_session() {
        let meta = RouteMeta { requires_auth: false, requires_admin: true };
        let store = MemoryTokenStore::new();
        assert_eq!(check(&Route::Admin, meta, &store, NOW), GuardDecision::Redirect(Route::Login));

        let user = MemoryTokenStore::with_token(&token("user", NOW + 600));
        assert_eq!(check(&Route::Admin, meta, &user, NOW), GuardDecision::Redirect(Route::Home));
    }

    #[test]
    fn public_routes_without_token_are_allowed() {
        let store = MemoryTokenStore::new();
        assert_eq!(before_each(&Route::Login, &store, NOW), GuardDecision::Allow);
        assert_eq!(before_each(&Route::NotFound, &store, NOW), GuardDecision::Allow);
    }

    #[test]
    fn non_admin_on_admin_route_goes_home() {
        let store = MemoryTokenStore::with_token(&token("user", NOW + 600));
        assert_eq!(before_each(&Route::Admin, &store, NOW), GuardDecision::Redirect(Route::Home));
        assert!(store.get().is_some(), "valid token must be kept");
    }

    #[test]
    fn valid_tokens_are_allowed_through() {
        let admin = MemoryTokenStore::with_token(&token("admin", NOW + 600));
        assert_eq!(before_each(&Route::Admin, &admin, NOW), GuardDecision::Allow);
        assert_eq!(before_each(&Route::Home, &admin, NOW), GuardDecision::Allow);

        let user = MemoryTokenStore::with_token(&token("user", NOW + 600));
        assert_eq!(before_each(&Route::Home, &user, NOW), GuardDecision::Allow);
    }

    #[test]
    fn expired_token_is_cleared_and_redirects_to_login() {
        for route in [Route::Home, Route::Admin] {
            let store = MemoryTokenStore::with_token(&token("admin", NOW - 1));
            assert_eq!(before_each(&route, &store, NOW), GuardDecision::Redirect(Route::Login));
            assert_eq!(store.get(), None);
        }
    }

    #[test]
    fn malformed_token_is_cleared_and_redirects_to_login() {
        for route in [Route::Home, Route::Admin] {
            let store = MemoryTokenStore::with_token("not-a-jwt");
            assert_eq!(before_each(&route, &store, NOW), GuardDecision::Redirect(Route::Login));
            assert_eq!(store.get(), None);
        }
    }

    #[test]
    fn bad_token_on_login_page_is_cleared_without_looping() {
        let store = MemoryTokenStore::with_token("not-a-jwt");
        assert_eq!(before_each(&Route::Login, &store, NOW), GuardDecision::Allow);
        assert_eq!(store.get(), None);

        let store = MemoryTokenStore::with_token(&token("user", NOW - 10));
        assert_eq!(before_each(&Route::Login, &store, NOW), GuardDecision::Allow);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn public_route_with_bad_token_still_clears_it() {
        let store = MemoryTokenStore::with_token("garbage");
        assert_eq!(before_each(&Route::NotFound, &store, NOW), GuardDecision::Redirect(Route::Login));
        assert_eq!(store.get(), None);
    }
}
