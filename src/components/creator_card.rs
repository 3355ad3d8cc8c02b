use chrono::Utc;
use yew::prelude::*;

use crate::models::Creator;
use crate::utils::time_ago;

#[derive(Properties, PartialEq)]
pub struct CreatorCardProps {
    pub creator: Creator,
    #[prop_or(false)]
    pub favorite_pending: bool,
    pub on_toggle_favorite: Callback<(u32, bool)>,
    pub on_details: Callback<Creator>,
}

#[function_component(CreatorCard)]
pub fn creator_card(props: &CreatorCardProps) -> Html {
    let c = &props.creator;

    let on_favorite_click = {
        let on_toggle = props.on_toggle_favorite.clone();
        let id = c.id;
        let current = c.is_favorite;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit((id, current));
        })
    };

    let on_card_click = {
        let on_details = props.on_details.clone();
        let creator = c.clone();
        Callback::from(move |_| on_details.emit(creator.clone()))
    };

    let interests = c
        .interests
        .iter()
        .map(|interest| html! { <span class="tag">{interest}</span> })
        .collect::<Html>();

    let platforms = c
        .social_networks
        .iter()
        .map(|network| html! { <span class="platform-chip">{&network.platform}</span> })
        .collect::<Html>();

    html! {
        <div class={classes!("creator-card", c.is_favorite.then_some("favorite"))} onclick={on_card_click}>
            <div class="creator-card-header">
                <div class="creator-name">
                    <h3>{&c.full_name}</h3>
                    <span class="creator-age">{format!("{} años", c.age)}</span>
                </div>
                <button
                    class="btn-favorite"
                    disabled={props.favorite_pending}
                    onclick={on_favorite_click}
                    title={if c.is_favorite { "Quitar de favoritos" } else { "Agregar a favoritos" }}
                >
                    {if c.is_favorite { "★" } else { "☆" }}
                </button>
            </div>

            <div class="creator-meta">
                <span class="creator-location">{"📍 "}{&c.location}</span>
                <span class="creator-modality">{&c.modality}</span>
                <span class="creator-nationality">{&c.nationality}</span>
            </div>

            <div class="creator-contact">
                <span>{&c.email}</span>
                if let Some(phone) = &c.phone {
                    <span>{phone}</span>
                }
            </div>

            <div class="creator-tags">{interests}</div>
            <div class="creator-platforms">{platforms}</div>

            <div class="creator-footer">
                <span class="registered-ago">
                    {"Registro: "}{time_ago(&c.created_at, Utc::now())}
                </span>
            </div>
        </div>
    }
}
