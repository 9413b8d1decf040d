//! Filtering and ordering of the route listing.

use super::types::{RouteDescriptor, SortKey};

/// Optional filters and ordering applied to the route listing.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Keep only routes whose method list contains this substring.
    pub method: Option<String>,
    /// Keep only routes whose name contains this substring.
    pub name: Option<String>,
    /// Keep only routes whose URI contains this substring.
    pub path: Option<String>,
    /// Field to sort by.
    pub sort: SortKey,
    /// Reverse the sorted order.
    pub reverse: bool,
}

/// Select and order routes according to the options.
///
/// Substring matches are case-sensitive. Unmatched filters yield an
/// empty sequence, never an error.
pub fn filter_routes(routes: &[RouteDescriptor], options: &FilterOptions) -> Vec<RouteDescriptor> {
    let mut selected: Vec<RouteDescriptor> = routes
        .iter()
        .filter(|route| matches_filters(route, options))
        .cloned()
        .collect();

    // sort_by is stable, so equal keys keep registration order
    selected.sort_by(|a, b| a.sort_value(options.sort).cmp(&b.sort_value(options.sort)));

    if options.reverse {
        selected.reverse();
    }

    selected
}

fn matches_filters(route: &RouteDescriptor, options: &FilterOptions) -> bool {
    if let Some(method) = &options.method {
        if !route.methods_joined().contains(method.as_str()) {
            return false;
        }
    }

    if let Some(name) = &options.name {
        if !route.name_or_empty().contains(name.as_str()) {
            return false;
        }
    }

    if let Some(path) = &options.path {
        if !route.uri.contains(path.as_str()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn route(uri: &str, name: Option<&str>, methods: &[&str]) -> RouteDescriptor {
        RouteDescriptor {
            host: String::new(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
            uri: uri.to_string(),
            name: name.map(|n| n.to_string()),
            action: format!("App\\Http\\Controllers\\{}", uri),
            middleware: vec!["web".to_string()],
        }
    }

    fn fixture() -> Vec<RouteDescriptor> {
        vec![
            route("users", Some("users.index"), &["GET", "HEAD"]),
            route("users/create", Some("users.create"), &["GET", "HEAD"]),
            route("users", Some("users.store"), &["POST"]),
            route("orders", None, &["GET"]),
        ]
    }

    #[test]
    fn no_filters_keeps_everything() {
        let routes = fixture();
        let out = filter_routes(&routes, &FilterOptions::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn path_filter_is_substring_containment() {
        let routes = fixture();
        let options = FilterOptions {
            path: Some("users".to_string()),
            ..Default::default()
        };

        let out = filter_routes(&routes, &options);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| r.uri.contains("users")));
    }

    #[test]
    fn method_filter_matches_joined_methods() {
        let routes = fixture();
        let options = FilterOptions {
            method: Some("POST".to_string()),
            ..Default::default()
        };

        let out = filter_routes(&routes, &options);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name.as_deref(), Some("users.store"));
    }

    #[test]
    fn name_filter_excludes_unnamed_routes() {
        let routes = fixture();
        let options = FilterOptions {
            name: Some("users".to_string()),
            ..Default::default()
        };

        let out = filter_routes(&routes, &options);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn filters_are_case_sensitive() {
        let routes = fixture();
        let options = FilterOptions {
            path: Some("Users".to_string()),
            ..Default::default()
        };

        assert!(filter_routes(&routes, &options).is_empty());
    }

    #[test]
    fn sorts_ascending_by_uri_by_default() {
        let routes = fixture();
        let out = filter_routes(&routes, &FilterOptions::default());

        let uris: Vec<&str> = out.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, vec!["orders", "users", "users", "users/create"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let routes = fixture();
        let out = filter_routes(&routes, &FilterOptions::default());

        // Both "users" routes keep their registration order
        assert_eq!(out[1].name.as_deref(), Some("users.index"));
        assert_eq!(out[2].name.as_deref(), Some("users.store"));
    }

    #[test]
    fn reverse_yields_exact_reverse_of_sort() {
        let routes = fixture();
        let forward = filter_routes(&routes, &FilterOptions::default());

        let options = FilterOptions {
            reverse: true,
            ..Default::default()
        };
        let backward = filter_routes(&routes, &options);

        let mut expected = forward;
        expected.reverse();
        assert_eq!(backward, expected);
    }

    #[test]
    fn unmatched_filter_yields_empty_sequence() {
        let routes = fixture();
        let options = FilterOptions {
            path: Some("nothing-here".to_string()),
            ..Default::default()
        };

        assert!(filter_routes(&routes, &options).is_empty());
    }
}
