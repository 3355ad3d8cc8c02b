use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::creator_card::CreatorCard;
use crate::components::creator_modal::CreatorModal;
use crate::components::filter_panel::FilterPanel;
use crate::hooks::{use_creators, use_favorites, use_filters, use_services};
use crate::models::Creator;
use crate::services::{creators_to_csv, download_csv, open_remote_export};

#[function_component(CreatorsPage)]
pub fn creators_page() -> Html {
    let services = use_services();
    let filters = use_filters(services.config.search_debounce_ms);
    let creators = use_creators((*filters.filters).clone());
    let favorites = use_favorites(creators.apply_favorite.clone());

    let selected = use_state(|| None::<Creator>);
    let exporting = use_state(|| false);

    let on_search_input = {
        let set_search = filters.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let on_details = {
        let selected = selected.clone();
        Callback::from(move |creator: Creator| selected.set(Some(creator)))
    };

    let on_close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    // Export: se prefiere el archivo generado por el servidor; si no
    // está disponible se serializa el listado visible del lado cliente
    let on_export = {
        let services = services.clone();
        let list = creators.creators.clone();
        let active_filters = filters.filters.clone();
        let exporting = exporting.clone();
        Callback::from(move |_: MouseEvent| {
            if *exporting {
                return;
            }
            exporting.set(true);

            let source = services.creators.clone();
            let list = (*list).clone();
            let active_filters = (*active_filters).clone();
            let exporting = exporting.clone();
            spawn_local(async move {
                let result = match source.export_url(&active_filters).await {
                    Some(url) => open_remote_export(&url),
                    None => creators_to_csv(&list)
                        .and_then(|csv| download_csv("creadores.csv", &csv)),
                };
                if let Err(e) = result {
                    log::error!("❌ Export falló: {}", e);
                }
                exporting.set(false);
            });
        })
    };

    let cards = creators
        .creators
        .iter()
        .map(|creator| {
            let favorite_pending = *favorites.pending == Some(creator.id);
            html! {
                <CreatorCard
                    key={creator.id}
                    creator={creator.clone()}
                    {favorite_pending}
                    on_toggle_favorite={favorites.toggle.clone()}
                    on_details={on_details.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="creators-page">
            <div class="creators-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Buscar por nombre o email..."
                    value={(*filters.search_input).clone()}
                    oninput={on_search_input}
                />
                <span class="results-count">
                    {format!("{} creadores", *creators.total)}
                </span>
                <button
                    class="btn-export"
                    disabled={*exporting || creators.creators.is_empty()}
                    onclick={on_export}
                >
                    {if *exporting { "Exportando..." } else { "Exportar CSV" }}
                </button>
            </div>

            <div class="creators-layout">
                <FilterPanel
                    filters={(*filters.filters).clone()}
                    on_toggle_interest={filters.toggle_interest.clone()}
                    on_toggle_platform={filters.toggle_platform.clone()}
                    on_set_nationality={filters.set_nationality.clone()}
                    on_set_location={filters.set_location.clone()}
                    on_set_modality={filters.set_modality.clone()}
                    on_set_age_range={filters.set_age_range.clone()}
                    on_clear={filters.clear.clone()}
                />

                <main class="creators-content">
                    if let Some(error) = &*creators.error {
                        <div class="error-box">
                            <p>{error}</p>
                            <button class="btn-retry" onclick={creators.refresh.reform(|_| ())}>
                                {"Reintentar"}
                            </button>
                        </div>
                    }

                    if let Some(error) = &*favorites.error {
                        <div class="error-toast">{error}</div>
                    }

                    if *creators.loading {
                        <div class="loading-indicator">{"Cargando creadores..."}</div>
                    } else if creators.creators.is_empty() && creators.error.is_none() {
                        <div class="empty-state">{"No hay creadores que coincidan con los filtros"}</div>
                    } else {
                        <div class="creators-grid">{cards}</div>
                    }

                    if *creators.has_more && !*creators.loading {
                        <button
                            class="btn-load-more"
                            disabled={*creators.loading_more}
                            onclick={creators.load_more.reform(|_| ())}
                        >
                            {if *creators.loading_more { "Cargando más..." } else { "Cargar más" }}
                        </button>
                    }
                </main>
            </div>

            if let Some(creator) = &*selected {
                <CreatorModal creator={creator.clone()} on_close={on_close_modal} />
            }
        </div>
    }
}
