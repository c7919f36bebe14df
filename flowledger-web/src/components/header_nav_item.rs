use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::{Link, Routable};

use crate::routes::AppRoute;

/// Translation key prefix for a route path: `/` is the dashboard, any other
/// path maps segment-by-segment under `nav.`.
pub(crate) fn nav_key(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "nav.dashboard".to_string()
    } else {
        format!("nav.{}", trimmed.replace('/', "."))
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps<R: Routable + Clone + PartialEq + Into<AppRoute> + 'static> {
    pub route: R,
    pub current_route: Option<AppRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item<R: Routable + Clone + PartialEq + Into<AppRoute> + 'static>(
    props: &HeaderNavItemProps<R>,
) -> Html {
    let (i18n, ..) = use_translation();

    let route = props.route.clone();
    let key = nav_key(&route.to_path());
    let route_name = i18n.t(&format!("{key}.title"));
    let route_icon = i18n.t(&format!("{key}.icon"));

    // Convert R to AppRoute for comparison
    let app_route: AppRoute = props.route.clone().into();
    let active_route_class = if props.current_route.as_ref() == Some(&app_route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<R> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{route_icon}"))}></i>
              {route_name}
          </Link<R>>
      </li>
    }
}

#[cfg(test)]
mod tests {
    use super::nav_key;

    #[test]
    fn root_path_is_the_dashboard() {
        assert_eq!(nav_key("/"), "nav.dashboard");
    }

    #[test]
    fn paths_map_to_nested_keys() {
        assert_eq!(nav_key("/records"), "nav.records");
        assert_eq!(nav_key("/admin/import"), "nav.admin.import");
        assert_eq!(nav_key("/admin/records/new"), "nav.admin.records.new");
        assert_eq!(nav_key("/admin/reconciliation"), "nav.admin.reconciliation");
    }
}
