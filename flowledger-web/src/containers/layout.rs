use crate::containers::header::Header;
use crate::routes::AppRoute;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Shell around every signed-in page: header, content area, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // The app ships a single daisyUI theme; tag the document once.
    use_effect_with((), |_| {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            root.set_attribute("data-theme", "light").unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header
                header_routes={props.header_routes.clone()}
                current_route={props.current_route.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main class="flex-grow p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{ "© 2026 FlowLedger · Powered by Rust and Yew" }</p>
            </footer>
        </div>
    }
}
