/// URL base de la API
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: via API_BASE_URL en .env
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Configuración de la aplicación, resuelta una sola vez al arrancar
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Toda llamada de red está acotada por este timeout
    pub request_timeout_ms: u32,
    pub page_size: u32,
    pub search_debounce_ms: u32,
    /// Modo demo: datos fixture en memoria en vez de la API remota
    pub use_fixtures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            request_timeout_ms: 15_000,
            page_size: 12,
            search_debounce_ms: 500,
            use_fixtures: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let use_fixtures = matches!(option_env!("USE_FIXTURES"), Some("1") | Some("true"));
        Self {
            use_fixtures,
            ..Self::default()
        }
    }
}
