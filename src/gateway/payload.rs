//! Aggregation of route descriptors into gateway registration payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::routes::RouteDescriptor;

/// One route registration sent to the gateway's admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPayload {
    /// Registration name: the URI with `/` replaced by `.`.
    pub name: String,
    /// URI the gateway matches on, always with a leading slash.
    pub uris: String,
    /// Comma-joined HTTP methods.
    pub methods: String,
    /// Application URL the gateway proxies to.
    pub upstream_url: String,
}

/// Result of splitting a route listing into publishable payloads and
/// routes the gateway cannot take.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Payloads in first-encounter order of their slug.
    pub valid: Vec<GatewayPayload>,
    /// Routes skipped from publishing, in listing order.
    pub invalid: Vec<RouteDescriptor>,
}

/// Whether a route can be registered with the gateway.
///
/// The root route and parameterized URIs (`users/{id}`) are skipped.
pub fn is_publishable(route: &RouteDescriptor) -> bool {
    route.uri != "/" && !route.uri.contains('{')
}

/// Collapse the filtered listing into one payload per unique slug.
///
/// Routes sharing a slug have their method strings comma-concatenated in
/// encounter order. Repeated methods are NOT deduplicated; that matches
/// what the gateway receives when the same route is registered twice.
pub fn aggregate(routes: &[RouteDescriptor], base_url: &str) -> Aggregation {
    let mut valid: Vec<GatewayPayload> = Vec::new();
    let mut by_slug: HashMap<String, usize> = HashMap::new();
    let mut invalid: Vec<RouteDescriptor> = Vec::new();

    for route in routes {
        if !is_publishable(route) {
            invalid.push(route.clone());
            continue;
        }

        let slug = route.uri.replace('/', ".");

        match by_slug.get(&slug) {
            Some(&index) => {
                let payload = &mut valid[index];
                payload.methods.push(',');
                payload.methods.push_str(&route.methods_csv());
            }
            None => {
                by_slug.insert(slug.clone(), valid.len());
                valid.push(GatewayPayload {
                    name: slug,
                    uris: format!("/{}", route.uri),
                    methods: route.methods_csv(),
                    upstream_url: join_upstream(base_url, &route.uri),
                });
            }
        }
    }

    Aggregation { valid, invalid }
}

fn join_upstream(base_url: &str, uri: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), uri)
}
