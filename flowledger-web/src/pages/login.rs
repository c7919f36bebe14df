use crate::{
    api::{ApiError, FlowLedgerClient},
    models::app_state::Session,
    routes::MainRoute,
};
use flowledger_shared::models::{LoginRequest, LoginResponse};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[derive(yew::Properties, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub on_success: Option<Callback<LoginResponse>>,
}

/// Controlled-input helper: mirror the input's value into a state handle.
fn text_setter(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let (i18n, _) = use_translation();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let on_success = props.on_success.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            busy.set(true);
            error.set(None);
            let busy = busy.clone();
            let error = error.clone();
            let on_success = on_success.clone();
            let navigator = navigator.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                match client.login(&request).await {
                    // The store only changes on a fully populated success;
                    // a refusal leaves the login state exactly as it was.
                    Ok(response) if Session::from_login(&response).is_some() => {
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                        if let Some(callback) = on_success {
                            callback.emit(response);
                        }
                    }
                    Ok(response) => {
                        let fallback = i18n.t("login.error.failed");
                        error.set(Some(response.message.unwrap_or(fallback)));
                    }
                    Err(ApiError::Http { message, .. }) => error.set(Some(message)),
                    Err(_) => error.set(Some(i18n.t("login.error.network"))),
                }
                busy.set(false);
            });
        })
    };

    let is_busy = *busy;
    let submit_disabled = is_busy || (*username).is_empty() || (*password).is_empty();

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col">
                <h1 class="text-3xl font-bold">{ i18n.t("app.title") }</h1>
                <div class="card w-full max-w-sm shadow-2xl bg-base-100">
                    <form class="card-body" {onsubmit}>
                        if let Some(message) = &*error {
                            <div class="alert alert-error text-sm">
                                <span>{ message.clone() }</span>
                            </div>
                        }
                        <div class="form-control">
                            <label class="label" for="login-username">
                                <span class="label-text">{ i18n.t("login.username") }</span>
                            </label>
                            <input
                                id="login-username"
                                class="input input-bordered"
                                type="text"
                                required=true
                                value={(*username).clone()}
                                oninput={text_setter(username.clone())}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="login-password">
                                <span class="label-text">{ i18n.t("login.password") }</span>
                            </label>
                            <input
                                id="login-password"
                                class="input input-bordered"
                                type="password"
                                required=true
                                value={(*password).clone()}
                                oninput={text_setter(password.clone())}
                            />
                        </div>
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" type="submit" disabled={submit_disabled}>
                                { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
