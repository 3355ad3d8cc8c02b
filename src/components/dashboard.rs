use yew::prelude::*;

use crate::hooks::{use_favorites_list, use_stats};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let stats = use_stats();
    let favorites = use_favorites_list();

    let favorite_rows = favorites
        .favorites
        .iter()
        .map(|creator| {
            let on_remove = {
                let remove = favorites.remove.clone();
                let id = creator.id;
                Callback::from(move |_| remove.emit(id))
            };
            html! {
                <li key={creator.id} class="favorite-row">
                    <span>{&creator.full_name}</span>
                    <span class="favorite-email">{&creator.email}</span>
                    <button class="btn-remove-favorite" onclick={on_remove}>
                        {"Quitar"}
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="dashboard">
            <h2>{"Resumen"}</h2>

            if let Some(error) = &*stats.error {
                <div class="error-box">
                    <p>{error}</p>
                    <button class="btn-retry" onclick={stats.reload.reform(|_| ())}>
                        {"Reintentar"}
                    </button>
                </div>
            }

            if *stats.loading {
                <div class="loading-indicator">{"Cargando estadísticas..."}</div>
            } else if let Some(data) = &*stats.stats {
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-value">{data.total_creators}</span>
                        <span class="stat-label">{"Creadores"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{data.total_favorites}</span>
                        <span class="stat-label">{"Favoritos"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{data.new_this_month}</span>
                        <span class="stat-label">{"Nuevos este mes"}</span>
                    </div>
                </div>

                if !data.by_modality.is_empty() {
                    <div class="modality-breakdown">
                        <h3>{"Por modalidad"}</h3>
                        <ul>
                            { for data.by_modality.iter().map(|(modality, count)| html! {
                                <li key={modality.clone()}>
                                    <span>{modality}</span>
                                    <span class="count">{*count}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            }

            <div class="favorites-section">
                <h3>{"Favoritos"}</h3>
                if let Some(error) = &*favorites.error {
                    <div class="error-toast">{error}</div>
                }
                if *favorites.loading {
                    <div class="loading-indicator">{"Cargando favoritos..."}</div>
                } else if favorites.favorites.is_empty() {
                    <p class="empty-state">{"Aún no hay creadores favoritos"}</p>
                } else {
                    <ul class="favorites-list">{favorite_rows}</ul>
                }
            </div>
        </div>
    }
}
