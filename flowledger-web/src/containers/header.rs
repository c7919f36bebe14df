use crate::{
    components::{
        header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
        user_dropdown::UserDropdown,
    },
    models::app_state::AppState,
    routes::{AdminRoute, AppRoute, MainRoute},
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Top navigation bar. The link set arrives already filtered by role
/// through `nav_routes`; nothing here decides what a user may see.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());

    let nav_items = {
        let current = props.current_route.clone();
        let routes = props.header_routes.clone().unwrap_or_default();
        move || -> Html {
            routes
                .iter()
                .map(|route| match route {
                    AppRoute::Main(main) => html! {
                        <HeaderNavItem<MainRoute> route={main.clone()} current_route={current.clone()} />
                    },
                    AppRoute::Admin(admin) => html! {
                        <HeaderNavItem<AdminRoute> route={admin.clone()} current_route={current.clone()} />
                    },
                })
                .collect()
        }
    };

    let account_area = match &*session {
        Some(session) => html! {
            <>
                <span class="hidden sm:inline text-sm text-base-content/80 mr-2">{ &session.username }</span>
                <UserDropdown on_logout={props.on_logout.clone()} />
            </>
        },
        None => html! {
            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                { i18n.t("header.login") }
            </Link<MainRoute>>
        },
    };

    html! {
        <nav class="navbar bg-base-300">
            <div class="navbar-start">
                <div class="dropdown sm:hidden">
                    <div tabindex="0" role="button" class="btn btn-ghost">
                        <i class="fa-solid fa-bars text-lg"></i>
                    </div>
                    <ul tabindex="0" class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-1">
                        { nav_items() }
                    </ul>
                </div>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                    { i18n.t("app.title") }
                </Link<MainRoute>>
            </div>
            <div class="navbar-center hidden sm:flex">
                <ul class="menu menu-horizontal px-1">
                    { nav_items() }
                </ul>
            </div>
            <div class="navbar-end gap-1">
                <LanguageSelector />
                { account_area }
            </div>
        </nav>
    }
}
