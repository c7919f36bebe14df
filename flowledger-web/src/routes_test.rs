//! Tests for the routing system
//!
//! Validates route definitions, path recognition, and the role-gated
//! navigation link sets.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AppRoute, MainRoute, nav_routes};
    use flowledger_shared::models::UserRole;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Customers must never be offered an admin link; the navigation the
    /// header renders is exactly this set.
    #[test]
    fn test_customer_nav_has_no_admin_routes() {
        let routes = nav_routes(UserRole::Customer);

        assert_eq!(
            routes,
            vec![
                AppRoute::Main(MainRoute::Home),
                AppRoute::Main(MainRoute::Records),
            ]
        );
        assert!(
            !routes
                .iter()
                .any(|route| matches!(route, AppRoute::Admin(_)))
        );
    }

    /// Admins get the dashboard plus every admin page.
    #[test]
    fn test_admin_nav_covers_all_admin_pages() {
        let routes = nav_routes(UserRole::Admin);

        assert_eq!(routes[0], AppRoute::Main(MainRoute::Home));
        for admin_route in AdminRoute::iter().filter(|route| route != &AdminRoute::NotFound) {
            assert!(
                routes.contains(&AppRoute::Admin(admin_route.clone())),
                "missing admin nav entry: {admin_route:?}"
            );
        }
        assert!(!routes.contains(&AppRoute::Admin(AdminRoute::NotFound)));
    }

    /// Tests route paths stay in sync with the page map
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Records.to_path(), "/records");
        assert_eq!(AdminRoute::Import.to_path(), "/admin/import");
        assert_eq!(AdminRoute::AddTarget.to_path(), "/admin/targets");
        assert_eq!(AdminRoute::AddRecord.to_path(), "/admin/records/new");
        assert_eq!(AdminRoute::Records.to_path(), "/admin/records");
        assert_eq!(AdminRoute::Reconciliation.to_path(), "/admin/reconciliation");
    }

    /// The record listing and the record entry form are distinct pages
    #[test]
    fn test_admin_record_paths_are_distinguished() {
        assert_eq!(
            AdminRoute::recognize("/admin/records"),
            Some(AdminRoute::Records)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/records/new"),
            Some(AdminRoute::AddRecord)
        );
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality_and_clone() {
        let route = MainRoute::Records;
        assert_eq!(route, route.clone());

        let admin = AppRoute::Admin(AdminRoute::Reconciliation);
        assert_eq!(admin, admin.clone());
        assert_ne!(admin, AppRoute::Admin(AdminRoute::Import));
        assert_ne!(
            AppRoute::Main(MainRoute::Home),
            AppRoute::Admin(AdminRoute::Import)
        );
    }

    /// Unknown paths fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(MainRoute::recognize("/nonsense"), Some(MainRoute::NotFound));
    }

    /// Default app route is the dashboard
    #[test]
    fn test_default_route() {
        assert_eq!(AppRoute::default(), AppRoute::Main(MainRoute::Home));
    }
}
