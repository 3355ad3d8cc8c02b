use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(false)]
    pub logging_in: bool,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                // La validación de campos vive en la capa de auth;
                // aquí solo se recogen los valores
                on_login.emit((email_input.value(), password_input.value()));
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎬"}</div>
                    </div>
                    <h1>{"Panel de Creadores"}</h1>
                    <p>{"Gestión de creadores UGC"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="operadora@agencia.cl"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(error) = &props.error {
                        <div class="login-error">{error}</div>
                    }

                    <button type="submit" class="btn-login" disabled={props.logging_in}>
                        <span class="btn-text">
                            {if props.logging_in { "Ingresando..." } else { "Iniciar Sesión" }}
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
