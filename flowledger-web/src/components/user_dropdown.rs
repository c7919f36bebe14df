use crate::{api::FlowLedgerClient, models::app_state::AppState, routes::MainRoute};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(yew::Properties, PartialEq)]
pub struct UserDropdownProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Account menu in the header: shows who is signed in and owns the logout
/// action.
#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let navigator = use_navigator().unwrap();
    let (i18n, ..) = use_translation();
    let session_state = use_selector(|state: &AppState| state.session.clone());
    let Some(session) = (*session_state).clone() else {
        return html! {};
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let navigator = navigator.clone();
            let on_logout = on_logout.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                // Best effort only: a dead server must not trap the user in
                // a signed-in shell. A 401 just means the session was
                // already gone.
                if let Err(err) = client.logout().await {
                    if err.status() != Some(reqwest::StatusCode::UNAUTHORIZED) {
                        log::error!("logout failed: {err}");
                    }
                }
                if let Some(callback) = on_logout {
                    callback.emit(());
                }
                navigator.push(&MainRoute::Login);
            });
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabindex="0" class="dropdown-content menu z-[1] p-2 shadow bg-base-200 rounded-box w-52">
                <li class="menu-title">
                    <span>{ &session.username }</span>
                </li>
                <li class="px-3 pb-2 pointer-events-none">
                    <span class="badge badge-outline badge-sm">{ session.role.to_string() }</span>
                </li>
                <li>
                    <a onclick={on_logout_click}>
                        <i class="fa-solid fa-right-from-bracket"></i>
                        { i18n.t("header.logout") }
                    </a>
                </li>
            </ul>
        </div>
    }
}
