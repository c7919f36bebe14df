use i18nrs::yew::use_translation;
use yew::prelude::*;

use crate::language::{self, LanguageInfo};

/// Dropdown for switching the interface language. The active language is
/// whatever i18nrs currently reports; picking an entry hands the code back
/// to the provider, which re-renders every consumer.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let active = i18n.get_current_language().to_string();

    let entry = |info: &LanguageInfo| -> Html {
        let code = info.code;
        let set_language = set_language.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            set_language.emit(code.to_string());
        });
        html! {
            <li>
                <a class={if code == active { "active" } else { "" }} {onclick}>
                    <span>{ info.flag }</span>
                    <span>{ info.native_name }</span>
                </a>
            </li>
        }
    };

    let mut languages: Vec<LanguageInfo> = language::supported_languages().into_values().collect();
    languages.sort_by_key(|info| info.native_name);

    let active_flag = language::get_language_info(&active).map_or("🌐", |info| info.flag);

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <span>{ active_flag }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                { for languages.iter().map(entry) }
            </ul>
        </div>
    }
}
