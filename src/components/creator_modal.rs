// ============================================================================
// CREATOR MODAL - detalle de un creador
// ============================================================================

use chrono::Utc;
use yew::prelude::*;

use crate::models::Creator;
use crate::utils::time_ago;

#[derive(Properties, PartialEq)]
pub struct CreatorModalProps {
    pub creator: Creator,
    pub on_close: Callback<()>,
}

pub struct CreatorModal;

pub enum Msg {
    Close,
}

impl Component for CreatorModal {
    type Message = Msg;
    type Properties = CreatorModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                ctx.props().on_close.emit(());
                false // No re-renderizar, se cierra
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let creator = &ctx.props().creator;

        let networks = creator
            .social_networks
            .iter()
            .map(|network| match &network.url {
                Some(url) => html! {
                    <a class="network-link" href={url.clone()} target="_blank">
                        {&network.platform}
                    </a>
                },
                None => html! { <span class="network-link">{&network.platform}</span> },
            })
            .collect::<Html>();

        html! {
            <div class="modal active">
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Close)}></div>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h2>{&creator.full_name}</h2>
                        <button
                            class="btn-close"
                            onclick={ctx.link().callback(|_| Msg::Close)}
                        >
                            {"✕"}
                        </button>
                    </div>

                    <div class="modal-body">
                        <div class="detail-section">
                            <div class="detail-label">{"Email"}</div>
                            <div class="detail-value">{&creator.email}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Teléfono"}</div>
                            <div class="detail-value">
                                {creator.phone.clone().unwrap_or_else(|| "Sin teléfono".to_string())}
                            </div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Edad"}</div>
                            <div class="detail-value">{format!("{} años", creator.age)}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Nacionalidad"}</div>
                            <div class="detail-value">{&creator.nationality}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Ubicación"}</div>
                            <div class="detail-value">{&creator.location}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Modalidad"}</div>
                            <div class="detail-value">{&creator.modality}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Intereses"}</div>
                            <div class="detail-value">{creator.interests.join(", ")}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Redes"}</div>
                            <div class="detail-value networks">{networks}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Registro"}</div>
                            <div class="detail-value">
                                {time_ago(&creator.created_at, Utc::now())}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
