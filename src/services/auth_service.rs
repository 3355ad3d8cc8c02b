use std::rc::Rc;

use crate::models::{LoginRequest, LoginResponse, User, VerifyResponse};
use crate::services::api_client::{ApiClient, ApiError};
use crate::utils::{StorageAdapter, STORAGE_KEY_AUTH_TOKEN};

/// Ciclo de vida del token: verify / login / logout.
/// El estado de sesión en sí vive en el hook `use_auth`.
pub struct AuthService {
    api: Rc<ApiClient>,
    storage: StorageAdapter,
}

impl AuthService {
    pub fn new(api: Rc<ApiClient>, storage: StorageAdapter) -> Self {
        Self { api, storage }
    }

    pub fn has_token(&self) -> bool {
        self.storage
            .get_opt::<String>(STORAGE_KEY_AUTH_TOKEN)
            .map(|t| !t.is_empty())
            .unwrap_or(false)
    }

    /// Verifica el token persistido contra el backend.
    /// Cualquier fallo limpia el token; el mensaje es informativo,
    /// nunca fatal para la app.
    pub async fn verify(&self) -> Result<User, String> {
        let result: Result<VerifyResponse, ApiError> = self
            .api
            .get("auth.php", &[("action", "verify".to_string())])
            .await;

        match result {
            Ok(response) if response.success => match response.data {
                Some(data) => Ok(data.user),
                None => {
                    self.storage.remove(STORAGE_KEY_AUTH_TOKEN);
                    Err("Respuesta de verificación sin usuario".to_string())
                }
            },
            Ok(response) => {
                self.storage.remove(STORAGE_KEY_AUTH_TOKEN);
                Err(response
                    .message
                    .unwrap_or_else(|| "Token inválido".to_string()))
            }
            Err(e) => {
                self.storage.remove(STORAGE_KEY_AUTH_TOKEN);
                Err(e.to_string())
            }
        }
    }

    /// Valida credenciales localmente antes de tocar la red; el fallo
    /// se devuelve como mensaje, nunca como excepción hacia la UI.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, String> {
        if let Some(message) = validate_credentials(email, password) {
            return Err(message);
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let result: Result<LoginResponse, ApiError> = self
            .api
            .post("auth.php", &[("action", "login".to_string())], &request)
            .await;

        match result {
            Ok(response) if response.success => {
                let data = response
                    .data
                    .ok_or_else(|| "Respuesta de login sin datos".to_string())?;
                match data.token {
                    Some(token) if !token.is_empty() => {
                        self.storage.set(STORAGE_KEY_AUTH_TOKEN, &token);
                        log::info!("✅ Login exitoso: {}", data.user.email);
                        Ok(data.user)
                    }
                    _ => Err("El servidor no entregó un token".to_string()),
                }
            }
            Ok(response) => Err(response
                .message
                .unwrap_or_else(|| "Credenciales incorrectas".to_string())),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Mejor esfuerzo contra el backend; la limpieza local es
    /// incondicional, así que el logout siempre "funciona" para la UI.
    pub async fn logout(&self) {
        let result: Result<serde_json::Value, ApiError> = self
            .api
            .post("auth.php", &[("action", "logout".to_string())], &())
            .await;

        if let Err(e) = result {
            log::warn!("⚠️ Logout remoto falló (se ignora): {}", e);
        }

        self.storage.remove(STORAGE_KEY_AUTH_TOKEN);
        log::info!("👋 Sesión cerrada");
    }
}

/// Chequeo local previo al login: campos presentes y forma mínima de email.
fn validate_credentials(email: &str, password: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Some("Completa email y contraseña".to_string());
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Some("El email no es válido".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credenciales_vacias_fallan_sin_red() {
        assert!(validate_credentials("", "secreto").is_some());
        assert!(validate_credentials("op@agencia.cl", "").is_some());
        assert!(validate_credentials("", "").is_some());
    }

    #[test]
    fn email_sin_arroba_falla() {
        assert!(validate_credentials("no-es-email", "secreto").is_some());
        assert!(validate_credentials("@agencia.cl", "secreto").is_some());
        assert!(validate_credentials("op@", "secreto").is_some());
    }

    #[test]
    fn credenciales_completas_pasan() {
        assert_eq!(validate_credentials("op@agencia.cl", "secreto"), None);
        assert_eq!(validate_credentials("  op@agencia.cl  ", "secreto"), None);
    }
}
