use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::CreatorFilters;

/// Estado de filtros + búsqueda con debounce. `filters` es el estado ya
/// confirmado (lo que viaja a la fuente de datos); `search_input` es lo
/// que el usuario está tipeando.
pub struct UseFiltersHandle {
    pub filters: UseStateHandle<CreatorFilters>,
    pub search_input: UseStateHandle<String>,
    pub set_search: Callback<String>,
    pub toggle_interest: Callback<String>,
    pub toggle_platform: Callback<String>,
    pub set_nationality: Callback<String>,
    pub set_location: Callback<String>,
    pub set_modality: Callback<String>,
    pub set_age_range: Callback<(Option<u32>, Option<u32>)>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_filters(debounce_ms: u32) -> UseFiltersHandle {
    let filters = use_state(CreatorFilters::default);
    let search_input = use_state(String::new);
    // Dropear el Timeout anterior cancela la ventana: solo el último
    // valor tipeado llega a confirmarse
    let debounce = use_mut_ref(|| None::<Timeout>);

    let set_search = {
        let filters = filters.clone();
        let search_input = search_input.clone();
        let debounce = debounce.clone();
        Callback::from(move |value: String| {
            search_input.set(value.clone());

            let filters = filters.clone();
            let timeout = Timeout::new(debounce_ms, move || {
                if filters.search != value {
                    let mut next = (*filters).clone();
                    next.search = value;
                    filters.set(next);
                }
            });
            *debounce.borrow_mut() = Some(timeout);
        })
    };

    let toggle_interest = {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            next.toggle_interest(&value);
            filters.set(next);
        })
    };

    let toggle_platform = {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            next.toggle_platform(&value);
            filters.set(next);
        })
    };

    let set_nationality = {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            next.set_nationality(&value);
            filters.set(next);
        })
    };

    let set_location = {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            next.set_location(&value);
            filters.set(next);
        })
    };

    let set_modality = {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            next.set_modality(&value);
            filters.set(next);
        })
    };

    let set_age_range = {
        let filters = filters.clone();
        Callback::from(move |(min, max): (Option<u32>, Option<u32>)| {
            let mut next = (*filters).clone();
            next.age_min = min;
            next.age_max = max;
            filters.set(next);
        })
    };

    // Resetea todo, incluido el término en vuelo: cancelar el debounce
    // pendiente garantiza que la query al servidor también queda limpia
    let clear = {
        let filters = filters.clone();
        let search_input = search_input.clone();
        let debounce = debounce.clone();
        Callback::from(move |_| {
            *debounce.borrow_mut() = None;
            search_input.set(String::new());
            let mut next = (*filters).clone();
            next.clear();
            filters.set(next);
        })
    };

    UseFiltersHandle {
        filters,
        search_input,
        set_search,
        toggle_interest,
        toggle_platform,
        set_nationality,
        set_location,
        set_modality,
        set_age_range,
        clear,
    }
}
