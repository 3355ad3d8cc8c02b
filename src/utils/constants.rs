/// Prefijo de todas las claves que esta app escribe en localStorage
pub const STORAGE_PREFIX: &str = "ugc_";

pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
pub const STORAGE_KEY_CURRENT_PAGE: &str = "currentPage";

/// Intervalo de re-verificación de la sesión
pub const SESSION_REFRESH_INTERVAL_MS: u32 = 10 * 60 * 1000;

// Catálogos de facetas mostrados en el panel de filtros.
// Los valores viajan tal cual en la query; el servidor no los valida.
pub const INTEREST_OPTIONS: [&str; 8] = [
    "moda",
    "belleza",
    "deporte",
    "tecnologia",
    "viajes",
    "gastronomia",
    "fitness",
    "gaming",
];

pub const PLATFORM_OPTIONS: [&str; 5] = ["instagram", "tiktok", "youtube", "facebook", "twitch"];

pub const MODALITY_OPTIONS: [&str; 3] = ["presencial", "remoto", "hibrido"];

pub const NATIONALITY_OPTIONS: [&str; 2] = ["chilena", "extranjera"];
