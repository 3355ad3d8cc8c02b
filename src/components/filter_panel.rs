use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::CreatorFilters;
use crate::utils::{INTEREST_OPTIONS, MODALITY_OPTIONS, NATIONALITY_OPTIONS, PLATFORM_OPTIONS};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filters: CreatorFilters,
    pub on_toggle_interest: Callback<String>,
    pub on_toggle_platform: Callback<String>,
    pub on_set_nationality: Callback<String>,
    pub on_set_location: Callback<String>,
    pub on_set_modality: Callback<String>,
    pub on_set_age_range: Callback<(Option<u32>, Option<u32>)>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let filters = &props.filters;
    let age_min_ref = use_node_ref();
    let age_max_ref = use_node_ref();

    let on_age_change = {
        let age_min_ref = age_min_ref.clone();
        let age_max_ref = age_max_ref.clone();
        let on_set_age_range = props.on_set_age_range.clone();
        Callback::from(move |_: Event| {
            let min = age_min_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok());
            let max = age_max_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok());
            on_set_age_range.emit((min, max));
        })
    };

    let interest_badges = INTEREST_OPTIONS
        .iter()
        .map(|option| {
            let selected = filters.interests.iter().any(|i| i == option);
            let onclick = {
                let on_toggle = props.on_toggle_interest.clone();
                let value = option.to_string();
                Callback::from(move |_| on_toggle.emit(value.clone()))
            };
            html! {
                <button
                    type="button"
                    class={classes!("facet-badge", selected.then_some("active"))}
                    {onclick}
                >
                    {*option}
                </button>
            }
        })
        .collect::<Html>();

    let platform_badges = PLATFORM_OPTIONS
        .iter()
        .map(|option| {
            let selected = filters.platforms.iter().any(|p| p == option);
            let onclick = {
                let on_toggle = props.on_toggle_platform.clone();
                let value = option.to_string();
                Callback::from(move |_| on_toggle.emit(value.clone()))
            };
            html! {
                <button
                    type="button"
                    class={classes!("facet-badge", selected.then_some("active"))}
                    {onclick}
                >
                    {*option}
                </button>
            }
        })
        .collect::<Html>();

    let on_nationality_change = {
        let on_set = props.on_set_nationality.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_set.emit(select.value());
        })
    };

    let on_modality_change = {
        let on_set = props.on_set_modality.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_set.emit(select.value());
        })
    };

    let on_location_change = {
        let on_set = props.on_set_location.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_set.emit(input.value());
        })
    };

    html! {
        <aside class="filter-panel">
            <div class="filter-section">
                <h3>{"Intereses"}</h3>
                <div class="facet-badges">{interest_badges}</div>
            </div>

            <div class="filter-section">
                <h3>{"Plataformas"}</h3>
                <div class="facet-badges">{platform_badges}</div>
            </div>

            <div class="filter-section">
                <h3>{"Nacionalidad"}</h3>
                <select onchange={on_nationality_change} value={filters.nationality.clone().unwrap_or_default()}>
                    <option value="">{"Todas"}</option>
                    { for NATIONALITY_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={filters.nationality.as_deref() == Some(*option)}>
                            {*option}
                        </option>
                    }) }
                </select>
            </div>

            <div class="filter-section">
                <h3>{"Modalidad"}</h3>
                <select onchange={on_modality_change} value={filters.modality.clone().unwrap_or_default()}>
                    <option value="">{"Todas"}</option>
                    { for MODALITY_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={filters.modality.as_deref() == Some(*option)}>
                            {*option}
                        </option>
                    }) }
                </select>
            </div>

            <div class="filter-section">
                <h3>{"Ubicación"}</h3>
                <input
                    type="text"
                    placeholder="santiago, valparaiso..."
                    value={filters.location.clone().unwrap_or_default()}
                    onchange={on_location_change}
                />
            </div>

            <div class="filter-section">
                <h3>{"Edad"}</h3>
                <div class="age-range">
                    <input
                        type="number"
                        min="18"
                        max="80"
                        placeholder="Mín"
                        ref={age_min_ref}
                        value={filters.age_min.map(|v| v.to_string()).unwrap_or_default()}
                        onchange={on_age_change.clone()}
                    />
                    <span>{"—"}</span>
                    <input
                        type="number"
                        min="18"
                        max="80"
                        placeholder="Máx"
                        ref={age_max_ref}
                        value={filters.age_max.map(|v| v.to_string()).unwrap_or_default()}
                        onchange={on_age_change}
                    />
                </div>
            </div>

            if filters.has_active() {
                <button
                    type="button"
                    class="btn-clear-filters"
                    onclick={props.on_clear.reform(|_| ())}
                >
                    {"Limpiar filtros"}
                </button>
            }
        </aside>
    }
}
