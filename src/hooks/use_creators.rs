use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_services::use_services;
use crate::models::{Creator, CreatorFilters};
use crate::services::CreatorQuery;

/// Fuente de datos paginada de creadores. Cada cambio de `filters`
/// dispara un fetch con reset; `load_more` agrega la página siguiente.
pub struct UseCreatorsHandle {
    pub creators: UseStateHandle<Vec<Creator>>,
    pub total: UseStateHandle<u32>,
    pub loading: UseStateHandle<bool>,
    pub loading_more: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub has_more: UseStateHandle<bool>,
    pub load_more: Callback<()>,
    pub refresh: Callback<()>,
    /// Escribe el valor confirmado por el servidor sobre la copia local
    pub apply_favorite: Callback<(u32, bool)>,
}

#[hook]
pub fn use_creators(filters: CreatorFilters) -> UseCreatorsHandle {
    let services = use_services();
    let creators = use_state(Vec::<Creator>::new);
    let total = use_state(|| 0u32);
    let loading = use_state(|| false);
    let loading_more = use_state(|| false);
    let error = use_state(|| None::<String>);
    let has_more = use_state(|| false);

    let page = use_mut_ref(|| 1u32);
    // Generación monotónica por petición: una respuesta cuya generación
    // ya no es la vigente se descarta, así un fetch lento no pisa el
    // resultado de filtros más nuevos
    let generation = use_mut_ref(|| 0u64);

    let fetch: Rc<dyn Fn(bool)> = {
        let services = services.clone();
        let filters = filters.clone();
        let creators = creators.clone();
        let total = total.clone();
        let loading = loading.clone();
        let loading_more = loading_more.clone();
        let error = error.clone();
        let has_more = has_more.clone();
        let page = page.clone();
        let generation = generation.clone();

        Rc::new(move |reset: bool| {
            let next_page = if reset { 1 } else { *page.borrow() + 1 };

            *generation.borrow_mut() += 1;
            let this_generation = *generation.borrow();

            if reset {
                loading.set(true);
            } else {
                loading_more.set(true);
            }
            error.set(None);

            let query = CreatorQuery {
                filters: filters.clone(),
                page: next_page,
                limit: services.config.page_size,
            };

            let source = services.creators.clone();
            let creators = creators.clone();
            let total = total.clone();
            let loading = loading.clone();
            let loading_more = loading_more.clone();
            let error = error.clone();
            let has_more = has_more.clone();
            let page = page.clone();
            let generation = generation.clone();

            spawn_local(async move {
                let result = source.fetch_page(&query).await;

                if *generation.borrow() != this_generation {
                    log::info!("🗑️ Respuesta obsoleta descartada (página {})", next_page);
                    return;
                }

                match result {
                    Ok(fetched) => {
                        *page.borrow_mut() = fetched.page;
                        has_more.set(fetched.has_more);
                        total.set(fetched.total);
                        if reset {
                            creators.set(fetched.creators);
                        } else {
                            let mut list = (*creators).clone();
                            list.extend(fetched.creators);
                            creators.set(list);
                        }
                    }
                    Err(e) => {
                        // La lista ya materializada queda intacta
                        log::error!("❌ Error pidiendo creadores: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
                loading_more.set(false);
            });
        })
    };

    // Refetch con reset cada vez que cambian los filtros confirmados
    {
        let fetch = fetch.clone();
        use_effect_with(filters, move |_| {
            fetch(true);
            || ()
        });
    }

    let load_more = {
        let fetch = fetch.clone();
        let has_more = has_more.clone();
        let loading = loading.clone();
        let loading_more = loading_more.clone();
        Callback::from(move |_| {
            // No-op si no hay más páginas o ya hay una petición en vuelo
            if !*has_more || *loading || *loading_more {
                return;
            }
            fetch(false);
        })
    };

    let refresh = {
        let fetch = fetch.clone();
        Callback::from(move |_| fetch(true))
    };

    let apply_favorite = {
        let creators = creators.clone();
        Callback::from(move |(id, value): (u32, bool)| {
            let mut list = (*creators).clone();
            if let Some(creator) = list.iter_mut().find(|c| c.id == id) {
                creator.is_favorite = value;
                creators.set(list);
            }
        })
    };

    UseCreatorsHandle {
        creators,
        total,
        loading,
        loading_more,
        error,
        has_more,
        load_more,
        refresh,
        apply_favorite,
    }
}
