use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_services::use_services;
use crate::models::Creator;

/// Toggle de favorito confirmado por servidor: el flip local ocurre
/// recién cuando llega la respuesta, nunca de forma optimista.
pub struct UseFavoritesHandle {
    /// Id con toggle en vuelo; deshabilita el control que lo disparó
    pub pending: UseStateHandle<Option<u32>>,
    pub error: UseStateHandle<Option<String>>,
    pub toggle: Callback<(u32, bool)>,
}

#[hook]
pub fn use_favorites(on_confirmed: Callback<(u32, bool)>) -> UseFavoritesHandle {
    let services = use_services();
    let pending = use_state(|| None::<u32>);
    let error = use_state(|| None::<String>);

    let toggle = {
        let services = services.clone();
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |(id, current): (u32, bool)| {
            if pending.is_some() {
                return;
            }
            pending.set(Some(id));
            error.set(None);

            let source = services.creators.clone();
            let pending = pending.clone();
            let error = error.clone();
            let on_confirmed = on_confirmed.clone();
            spawn_local(async move {
                match source.toggle_favorite(id, current).await {
                    Ok(outcome) => {
                        log::info!(
                            "⭐ Favorito {}: {} (is_favorite={})",
                            id,
                            outcome.action,
                            outcome.is_favorite
                        );
                        // Se escribe el valor que confirmó el servidor,
                        // no la negación del estado previo
                        on_confirmed.emit((id, outcome.is_favorite));
                    }
                    Err(e) => {
                        // El estado local queda como estaba
                        log::error!("❌ Toggle de favorito falló: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                pending.set(None);
            });
        })
    };

    UseFavoritesHandle {
        pending,
        error,
        toggle,
    }
}

/// Listado de favoritos con eliminación explícita (DELETE).
pub struct UseFavoritesListHandle {
    pub favorites: UseStateHandle<Vec<Creator>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub reload: Callback<()>,
    pub remove: Callback<u32>,
}

#[hook]
pub fn use_favorites_list() -> UseFavoritesListHandle {
    let services = use_services();
    let favorites = use_state(Vec::<Creator>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let reload = {
        let services = services.clone();
        let favorites = favorites.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let source = services.creators.clone();
            let favorites = favorites.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                error.set(None);
                match source.favorites().await {
                    Ok(list) => favorites.set(list),
                    Err(e) => {
                        log::error!("❌ Error listando favoritos: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let remove = {
        let services = services.clone();
        let favorites = favorites.clone();
        let error = error.clone();
        Callback::from(move |id: u32| {
            let source = services.creators.clone();
            let favorites = favorites.clone();
            let error = error.clone();
            spawn_local(async move {
                match source.remove_favorite(id).await {
                    Ok(()) => {
                        let list: Vec<Creator> = (*favorites)
                            .iter()
                            .filter(|c| c.id != id)
                            .cloned()
                            .collect();
                        favorites.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error quitando favorito {}: {}", id, e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    UseFavoritesListHandle {
        favorites,
        loading,
        error,
        reload,
        remove,
    }
}
