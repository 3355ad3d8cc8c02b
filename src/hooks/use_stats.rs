use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_services::use_services;
use crate::models::DashboardStats;

pub struct UseStatsHandle {
    pub stats: UseStateHandle<Option<DashboardStats>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_stats() -> UseStatsHandle {
    let services = use_services();
    let stats = use_state(|| None::<DashboardStats>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let fetch = {
        let services = services.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let source = services.creators.clone();
            let stats = stats.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                error.set(None);
                match source.dashboard_stats().await {
                    Ok(fetched) => {
                        stats.set(Some(fetched));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(());
            || ()
        });
    }

    UseStatsHandle {
        stats,
        loading,
        error,
        reload: fetch,
    }
}
