use yew_router::prelude::*;

/// Tabla de rutas de la consola
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Requisitos declarados por cada ruta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    const AUTH: Self = Self { requires_auth: true, requires_admin: false };
    const ADMIN: Self = Self { requires_auth: true, requires_admin: true };
}

impl Route {
    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Login | Route::NotFound => RouteMeta::PUBLIC,
            Route::Home => RouteMeta::AUTH,
            Route::Admin => RouteMeta::ADMIN,
        }
    }

    /// Destino tras un login correcto
    pub fn landing_for(is_admin: bool) -> Self {
        if is_admin {
            Route::Admin
        } else {
            Route::Home
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_route_table() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Admin.to_path(), "/admin");
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn every_admin_route_also_requires_auth() {
        for route in [Route::Login, Route::Home, Route::Admin, Route::NotFound] {
            let meta = route.meta();
            assert!(!meta.requires_admin || meta.requires_auth, "{:?}", route);
        }
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(Route::landing_for(true), Route::Admin);
        assert_eq!(Route::landing_for(false), Route::Home);
    }
}
