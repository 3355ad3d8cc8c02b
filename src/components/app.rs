use yew::prelude::*;

use crate::components::brands::BrandsPage;
use crate::components::creators_page::CreatorsPage;
use crate::components::dashboard::Dashboard;
use crate::components::login_screen::LoginScreen;
use crate::config::AppConfig;
use crate::hooks::{use_auth, use_services, AppServices, AuthStatus};
use crate::utils::STORAGE_KEY_CURRENT_PAGE;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Section {
    Dashboard,
    Creators,
    Brands,
}

impl Section {
    fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Creators => "creators",
            Section::Brands => "brands",
        }
    }

    fn from_slug(slug: &str) -> Self {
        match slug {
            "creators" => Section::Creators,
            "brands" => Section::Brands,
            _ => Section::Dashboard,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Creators => "Creadores",
            Section::Brands => "Marcas",
        }
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let services = use_services();
    let auth = use_auth();

    // La sección activa sobrevive recargas vía storage
    let section = {
        let storage = services.storage.clone();
        use_state(move || {
            Section::from_slug(&storage.get(STORAGE_KEY_CURRENT_PAGE, "dashboard".to_string()))
        })
    };

    let on_select = {
        let storage = services.storage.clone();
        let section = section.clone();
        Callback::from(move |next: Section| {
            storage.set(STORAGE_KEY_CURRENT_PAGE, &next.slug());
            section.set(next);
        })
    };

    match auth.state.status {
        AuthStatus::Checking => html! {
            <div class="app-loading">
                <div class="spinner"></div>
                <p>{"Verificando sesión..."}</p>
            </div>
        },
        AuthStatus::Unauthenticated => html! {
            <LoginScreen
                on_login={auth.login.clone()}
                error={auth.state.error.clone()}
                logging_in={*auth.logging_in}
            />
        },
        AuthStatus::Authenticated => {
            let user = auth.state.user.clone();
            let show_brands = user.as_ref().map(|u| u.can_view_brands()).unwrap_or(false);

            let mut sections = vec![Section::Dashboard, Section::Creators];
            if show_brands {
                sections.push(Section::Brands);
            }

            let nav = sections
                .into_iter()
                .map(|s| {
                    let active = *section == s;
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_| on_select.emit(s))
                    };
                    html! {
                        <button
                            class={classes!("nav-item", active.then_some("active"))}
                            {onclick}
                        >
                            {s.label()}
                        </button>
                    }
                })
                .collect::<Html>();

            let content = match *section {
                Section::Dashboard => html! { <Dashboard /> },
                Section::Creators => html! { <CreatorsPage /> },
                Section::Brands => html! { <BrandsPage /> },
            };

            html! {
                <div class="app-shell">
                    <header class="app-header">
                        <h1>{"Panel de Creadores"}</h1>
                        <nav class="app-nav">{nav}</nav>
                        <div class="app-user">
                            if let Some(user) = &user {
                                <span class="user-name">{&user.name}</span>
                            }
                            <button class="btn-logout" onclick={auth.logout.reform(|_| ())}>
                                {"Salir"}
                            </button>
                        </div>
                    </header>
                    <div class="app-content">{content}</div>
                </div>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Servicios construidos una sola vez y compartidos por Context
    let services = use_state(|| AppServices::new(AppConfig::from_env()));

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            <AppShell />
        </ContextProvider<AppServices>>
    }
}
