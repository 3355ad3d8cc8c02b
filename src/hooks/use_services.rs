// ============================================================================
// APP SERVICES - servicios construidos explícitamente e inyectados por
// Context API de Yew. Nada de singletons a nivel de módulo: los tests
// pueden sustituir cualquier pieza.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{ApiClient, AuthService, CreatorDataSource, FixtureCreators, RemoteCreators};
use crate::utils::{StorageAdapter, STORAGE_PREFIX};

#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub storage: StorageAdapter,
    pub api: Rc<ApiClient>,
    pub auth: Rc<AuthService>,
    pub creators: Rc<dyn CreatorDataSource>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

impl AppServices {
    /// La estrategia de datos se elige una sola vez, al arrancar.
    pub fn new(config: AppConfig) -> Self {
        let storage = StorageAdapter::new(STORAGE_PREFIX);
        let api = Rc::new(ApiClient::new(&config, storage.clone()));
        let auth = Rc::new(AuthService::new(api.clone(), storage.clone()));

        let creators: Rc<dyn CreatorDataSource> = if config.use_fixtures {
            log::info!("🧪 Modo demo: datos fixture en memoria");
            Rc::new(FixtureCreators::with_demo_data())
        } else {
            Rc::new(RemoteCreators::new(api.clone()))
        };

        Self {
            config,
            storage,
            api,
            auth,
            creators,
        }
    }
}

#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices no está montado en el árbol")
}
