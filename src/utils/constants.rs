/// Clave de localStorage donde se guarda el token crudo
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Rol con acceso al panel de administración
pub const ROLE_ADMIN: &str = "admin";

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const PROMPT_HISTORY_ENDPOINT: &str = "/api/v1/prompts/history";
pub const USERS_STATS_ENDPOINT: &str = "/api/v1/admin/users/stats";
