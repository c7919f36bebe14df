use crate::models::app_state::{AppState, Session};
use crate::pages::{
    AddRecordPage, AddTargetPage, AdminRecordsPage, DashboardPage, ErrorPage, ImportPage,
    LoginPage, ReconciliationPage, RecordsPage,
};
use crate::containers::layout::Layout;
use flowledger_shared::models::UserRole;
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/records")]
    Records,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin/import")]
    Import,
    #[at("/admin/targets")]
    AddTarget,
    #[at("/admin/records/new")]
    AddRecord,
    #[at("/admin/records")]
    Records,
    #[at("/admin/reconciliation")]
    Reconciliation,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// The app routes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppRoute {
    Main(MainRoute),
    Admin(AdminRoute),
}

impl Default for AppRoute {
    fn default() -> Self {
        AppRoute::Main(MainRoute::Home)
    }
}

impl From<AdminRoute> for AppRoute {
    fn from(route: AdminRoute) -> Self {
        AppRoute::Admin(route)
    }
}

impl From<MainRoute> for AppRoute {
    fn from(route: MainRoute) -> Self {
        AppRoute::Main(route)
    }
}

/// Link set for the navigation header. Customers only ever see customer
/// links; this is the sole source the header renders from.
pub fn nav_routes(role: UserRole) -> Vec<AppRoute> {
    match role {
        UserRole::Admin => {
            let mut routes = vec![AppRoute::Main(MainRoute::Home)];
            routes.extend(
                AdminRoute::iter()
                    .filter(|route| route != &AdminRoute::NotFound)
                    .map(AppRoute::Admin),
            );
            routes
        }
        UserRole::Customer => vec![
            AppRoute::Main(MainRoute::Home),
            AppRoute::Main(MainRoute::Records),
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let session_opt = (*session).clone();
    let is_admin = session_opt.as_ref().is_some_and(Session::is_admin);
    let header_routes = session_opt.as_ref().map(|session| nav_routes(session.role));
    let on_logout = props.on_logout.clone();

    // Without a session the login page is the only thing ever rendered,
    // whatever the URL says.
    if session_opt.is_none() {
        return match props.route {
            MainRoute::Login => html! { <LoginPage /> },
            _ => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        };
    }

    let page = |route: MainRoute, content: Html| -> Html {
        html! {
            <Layout
                header_routes={header_routes.clone()}
                current_route={AppRoute::Main(route)}
                on_logout={Some(on_logout.clone())}
            >
                { content }
            </Layout>
        }
    };

    match props.route.clone() {
        MainRoute::Login => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
        MainRoute::Home => page(MainRoute::Home, html! { <DashboardPage /> }),
        MainRoute::Records => page(MainRoute::Records, html! { <RecordsPage /> }),
        MainRoute::AdminRoot | MainRoute::Admin => {
            if !is_admin {
                // Customers never get admin links rendered; a hand-typed URL
                // lands back on the dashboard.
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            let on_logout = on_logout.clone();
            html! {
                <Switch<AdminRoute> render={move |route| switch_admin(route, on_logout.clone())} />
            }
        }
        MainRoute::NotFound => page(MainRoute::NotFound, html! { <ErrorPage /> }),
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    let content = match route {
        AdminRoute::Import => html! { <ImportPage /> },
        AdminRoute::AddTarget => html! { <AddTargetPage /> },
        AdminRoute::AddRecord => html! { <AddRecordPage /> },
        AdminRoute::Records => html! { <AdminRecordsPage /> },
        AdminRoute::Reconciliation => html! { <ReconciliationPage /> },
        AdminRoute::NotFound => {
            return html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> };
        }
    };
    html! {
        <Layout
            header_routes={Some(nav_routes(UserRole::Admin))}
            current_route={AppRoute::Admin(route)}
            on_logout={Some(on_logout)}
        >
            { content }
        </Layout>
    }
}
