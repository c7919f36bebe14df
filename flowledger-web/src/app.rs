use crate::api::FlowLedgerClient;
use crate::components::loading::Loading;
use crate::models::app_state::{AppState, Session};
use crate::pages::LoginPage;
use crate::routes::MainRoute;
use flowledger_shared::models::LoginResponse;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let app_state = use_state(|| None::<AppState>);

    {
        let app_state_handle = app_state.clone();
        let store_dispatch_handle = store_dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                // Startup probe: a cookie session from a previous visit
                // survives reloads. Probe failure means logged out.
                let client = FlowLedgerClient::shared();
                let state = match client.auth_status().await {
                    Ok(status) => AppState {
                        session: Session::from_status(&status),
                    },
                    Err(err) => {
                        log::error!("session probe failed: {err}");
                        AppState::default()
                    }
                };
                app_state_handle.set(Some(state.clone()));
                store_dispatch_handle.set(state);
            });
            || ()
        });
    }

    let logout_callback = {
        let state_setter = app_state.clone();
        let logout_dispatch = store_dispatch.clone();
        Callback::from(move |_| {
            let state = AppState::cleared();
            state_setter.set(Some(state.clone()));
            logout_dispatch.set(state);
        })
    };

    match *app_state {
        None => html! { <Loading /> },
        // No session: the login view is the only thing rendered, whatever
        // the URL says.
        Some(ref state) if !state.is_authenticated() => {
            let on_success = {
                let state_setter = app_state.clone();
                let store_dispatch = store_dispatch;
                Callback::from(move |login: LoginResponse| {
                    if let Some(session) = Session::from_login(&login) {
                        let state = AppState::logged_in(session);
                        state_setter.set(Some(state.clone()));
                        store_dispatch.set(state);
                    }
                })
            };
            html! { <LoginPage {on_success} /> }
        }
        Some(_) => html! {
            <BrowserRouter>
                <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
            </BrowserRouter>
        },
    }
}
