use yew::prelude::*;

/// Placeholder: el módulo de marcas aún no está implementado
#[function_component(BrandsPage)]
pub fn brands_page() -> Html {
    html! {
        <div class="brands-page placeholder">
            <h2>{"Marcas"}</h2>
            <p>{"Este módulo estará disponible próximamente."}</p>
        </div>
    }
}
