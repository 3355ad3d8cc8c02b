use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use web_sys::{window, Storage};

const ENVELOPE_VERSION: u32 = 1;

/// Sobre JSON con el que se persiste cada valor: `{value, timestamp, version}`.
/// El timestamp y la versión permiten invalidar datos viejos sin romper
/// lecturas de valores "legacy" guardados sin sobre.
#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    value: &'a T,
    timestamp: DateTime<Utc>,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<T> {
    value: T,
    #[serde(default)]
    #[allow(dead_code)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    #[allow(dead_code)]
    version: u32,
}

/// Wrapper de localStorage con prefijo de namespace.
/// Ningún fallo del store se propaga: set/remove devuelven `false`,
/// get devuelve el default del caller.
#[derive(Clone, PartialEq)]
pub struct StorageAdapter {
    prefix: String,
}

impl StorageAdapter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn backend() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let Some(storage) = Self::backend() else {
            log::warn!("💾 localStorage no disponible, no se guarda '{}'", key);
            return false;
        };

        let envelope = EnvelopeRef {
            value,
            timestamp: Utc::now(),
            version: ENVELOPE_VERSION,
        };

        let json = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                log::error!("💾 Error serializando '{}': {}", key, e);
                return false;
            }
        };

        match storage.set_item(&self.full_key(key), &json) {
            Ok(()) => true,
            Err(_) => {
                // Típicamente QuotaExceededError
                log::error!("💾 Error guardando '{}' en localStorage", key);
                false
            }
        }
    }

    /// `None` si la clave no existe, el JSON está corrupto o el store no
    /// está disponible.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let storage = Self::backend()?;
        let raw = storage.get_item(&self.full_key(key)).ok()??;
        decode_stored(&raw)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_opt(key).unwrap_or(default)
    }

    pub fn remove(&self, key: &str) -> bool {
        let Some(storage) = Self::backend() else {
            return false;
        };
        storage.remove_item(&self.full_key(key)).is_ok()
    }

    /// Elimina únicamente las claves bajo el prefijo de esta instancia.
    /// Devuelve cuántas se borraron.
    pub fn clear(&self) -> usize {
        let Some(storage) = Self::backend() else {
            return 0;
        };

        let len = storage.length().unwrap_or(0);
        let mut keys = Vec::new();
        for i in 0..len {
            if let Ok(Some(key)) = storage.key(i) {
                if key.starts_with(&self.prefix) {
                    keys.push(key);
                }
            }
        }

        for key in &keys {
            let _ = storage.remove_item(key);
        }

        keys.len()
    }
}

/// Desempaqueta el sobre `{value, ...}`; si el JSON no tiene esa forma,
/// intenta leerlo como valor plano (formato legacy).
fn decode_stored<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(raw) {
        return Some(envelope.value);
    }
    serde_json::from_str::<T>(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodifica_sobre_completo() {
        let raw = r#"{"value":"tok123","timestamp":"2026-03-01T12:00:00Z","version":1}"#;
        let value: Option<String> = decode_stored(raw);
        assert_eq!(value, Some("tok123".to_string()));
    }

    #[test]
    fn decodifica_valor_legacy_sin_sobre() {
        let value: Option<String> = decode_stored(r#""tok-plano""#);
        assert_eq!(value, Some("tok-plano".to_string()));

        let number: Option<u32> = decode_stored("42");
        assert_eq!(number, Some(42));
    }

    #[test]
    fn json_corrupto_devuelve_none() {
        let value: Option<String> = decode_stored("{no es json");
        assert_eq!(value, None);
    }

    #[test]
    fn sobre_sin_timestamp_ni_version_se_acepta() {
        let value: Option<u32> = decode_stored(r#"{"value":7}"#);
        assert_eq!(value, Some(7));
    }

    #[test]
    fn prefijo_se_aplica_a_la_clave() {
        let storage = StorageAdapter::new("ugc_");
        assert_eq!(storage.full_key("authToken"), "ugc_authToken");
    }
}
