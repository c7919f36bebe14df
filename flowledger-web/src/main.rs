mod api;
mod app;
mod components;
mod config;
mod containers;
mod format;
mod language;
mod models;
mod pages;
mod routes;
mod view_state;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(LocalizedApp)]
fn localized_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: "zh-CN".to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

/// Route panics to the browser console instead of a truncated abort.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_else(|| "unknown panic".to_string());
        web_sys::console::error_1(&format!("Panic: {message}").into());
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));
}

fn main() {
    install_panic_hook();
    web_sys::console::log_1(&"Starting FlowLedger".into());
    Renderer::<LocalizedApp>::new().render();
}
