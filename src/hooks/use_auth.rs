use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_services::use_services;
use crate::models::User;
use crate::utils::SESSION_REFRESH_INTERVAL_MS;

/// checking → authenticated | unauthenticated; authenticated puede volver
/// a unauthenticated por logout, refresh fallido o un 401 interceptado.
#[derive(Clone, PartialEq, Debug)]
pub enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
    /// Informativo, nunca fatal
    pub error: Option<String>,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub logging_in: UseStateHandle<bool>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let services = use_services();
    let state = use_state(|| AuthState {
        status: AuthStatus::Checking,
        user: None,
        error: None,
    });
    let logging_in = use_state(|| false);

    // Verificación al montar + interceptor de 401
    {
        let services = services.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            {
                let state = state.clone();
                services.api.set_unauthorized_hook(move || {
                    state.set(AuthState {
                        status: AuthStatus::Unauthenticated,
                        user: None,
                        error: Some("Tu sesión expiró, inicia sesión de nuevo".to_string()),
                    });
                });
            }

            if !services.auth.has_token() {
                // Sin token no hay llamada de red
                log::info!("ℹ️ Sin token persistido, se pide login");
                state.set(AuthState {
                    status: AuthStatus::Unauthenticated,
                    user: None,
                    error: None,
                });
            } else {
                let auth = services.auth.clone();
                let state = state.clone();
                spawn_local(async move {
                    match auth.verify().await {
                        Ok(user) => {
                            log::info!("✅ Sesión restaurada: {}", user.email);
                            state.set(AuthState {
                                status: AuthStatus::Authenticated,
                                user: Some(user),
                                error: None,
                            });
                        }
                        Err(message) => {
                            log::warn!("⚠️ Verificación falló: {}", message);
                            state.set(AuthState {
                                status: AuthStatus::Unauthenticated,
                                user: None,
                                error: Some(message),
                            });
                        }
                    }
                });
            }

            let services = services.clone();
            move || services.api.clear_unauthorized_hook()
        });
    }

    // Refresh periódico mientras haya sesión; un refresh fallido
    // degrada a unauthenticated (el token ya fue limpiado por verify)
    {
        let services = services.clone();
        let state = state.clone();
        let is_authenticated = state.status == AuthStatus::Authenticated;
        use_effect_with(is_authenticated, move |authenticated| {
            let interval = authenticated.then(|| {
                Interval::new(SESSION_REFRESH_INTERVAL_MS, move || {
                    let auth = services.auth.clone();
                    let state = state.clone();
                    spawn_local(async move {
                        match auth.verify().await {
                            Ok(user) => {
                                state.set(AuthState {
                                    status: AuthStatus::Authenticated,
                                    user: Some(user),
                                    error: None,
                                });
                            }
                            Err(message) => {
                                log::warn!("⚠️ Refresh de sesión falló: {}", message);
                                state.set(AuthState {
                                    status: AuthStatus::Unauthenticated,
                                    user: None,
                                    error: Some(message),
                                });
                            }
                        }
                    });
                })
            });
            move || drop(interval)
        });
    }

    let login = {
        let services = services.clone();
        let state = state.clone();
        let logging_in = logging_in.clone();
        Callback::from(move |(email, password): (String, String)| {
            // Un login en vuelo a la vez
            if *logging_in {
                return;
            }
            logging_in.set(true);

            let auth = services.auth.clone();
            let state = state.clone();
            let logging_in = logging_in.clone();
            spawn_local(async move {
                match auth.login(&email, &password).await {
                    Ok(user) => {
                        state.set(AuthState {
                            status: AuthStatus::Authenticated,
                            user: Some(user),
                            error: None,
                        });
                    }
                    Err(message) => {
                        log::warn!("❌ Login fallido: {}", message);
                        state.set(AuthState {
                            status: AuthStatus::Unauthenticated,
                            user: None,
                            error: Some(message),
                        });
                    }
                }
                logging_in.set(false);
            });
        })
    };

    let logout = {
        let services = services.clone();
        let state = state.clone();
        Callback::from(move |_| {
            let auth = services.auth.clone();
            let state = state.clone();
            spawn_local(async move {
                auth.logout().await;
                state.set(AuthState {
                    status: AuthStatus::Unauthenticated,
                    user: None,
                    error: None,
                });
            });
        })
    };

    UseAuthHandle {
        state,
        logging_in,
        login,
        logout,
    }
}
