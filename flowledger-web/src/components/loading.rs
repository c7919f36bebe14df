use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Full-page placeholder shown while the startup session probe runs.
#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex min-h-screen items-center justify-center bg-base-200">
            <div class="flex flex-col items-center gap-3">
                <i class="fas fa-coins text-primary text-3xl"></i>
                <span class="text-xl font-medium">{ i18n.t("app.title") }</span>
                <span class="loading loading-spinner loading-lg"></span>
                <span class="text-sm text-base-content/70">{ i18n.t("common.loading") }</span>
            </div>
        </div>
    }
}
