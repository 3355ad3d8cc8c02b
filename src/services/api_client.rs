// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (stateless)
// ============================================================================
// Inyecta el header Authorization, codifica/decodifica JSON y convierte
// cualquier respuesta no-2xx en un ApiError. La recuperación la decide
// el caller.
// ============================================================================

use std::cell::RefCell;

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::utils::{StorageAdapter, STORAGE_KEY_AUTH_TOKEN};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("La petición excedió {0} ms")]
    TimedOut(u32),
    #[error("Respuesta inválida: {0}")]
    Parse(String),
    #[error("El servidor rechazó la operación: {0}")]
    Rejected(String),
    #[error("Sesión expirada")]
    Unauthorized,
}

pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    storage: StorageAdapter,
    /// Instalado por la capa de auth: se invoca ante cualquier 401,
    /// después de limpiar el token y antes de propagar el error.
    on_unauthorized: RefCell<Option<Box<dyn Fn()>>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, storage: StorageAdapter) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout_ms: config.request_timeout_ms,
            storage,
            on_unauthorized: RefCell::new(None),
        }
    }

    pub fn set_unauthorized_hook(&self, hook: impl Fn() + 'static) {
        *self.on_unauthorized.borrow_mut() = Some(Box::new(hook));
    }

    pub fn clear_unauthorized_hook(&self) {
        *self.on_unauthorized.borrow_mut() = None;
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&self.url(endpoint))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = self
            .with_auth(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError> {
        let builder = Request::post(&self.url(endpoint))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = self
            .with_auth(builder)
            .json(body)
            .map_err(|e| ApiError::Network(format!("Error serializando body: {}", e)))?;
        let response = self.dispatch(request).await?;
        self.decode(response).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::delete(&self.url(endpoint))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = self
            .with_auth(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.dispatch(request).await?;
        self.decode(response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.storage.get_opt::<String>(STORAGE_KEY_AUTH_TOKEN) {
            Some(token) if !token.is_empty() => {
                builder.header("Authorization", &format!("Bearer {}", token))
            }
            _ => builder,
        }
    }

    /// Toda petición corre contra el timeout configurado; si expira,
    /// el caller recibe el error específico TimedOut.
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let send = request.send();
        pin_mut!(send);
        let timeout = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(timeout);

        match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(_) => {
                log::warn!("⏱️ Petición abortada por timeout ({} ms)", self.timeout_ms);
                Err(ApiError::TimedOut(self.timeout_ms))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        if response.status() == 401 {
            log::warn!("🔒 401 recibido, limpiando token y forzando logout");
            self.storage.remove(STORAGE_KEY_AUTH_TOKEN);
            if let Some(hook) = self.on_unauthorized.borrow().as_ref() {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
