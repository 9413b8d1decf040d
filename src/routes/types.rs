//! Route descriptor types read from the application's route manifest.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One registered HTTP endpoint in the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Host constraint, empty when the route answers on any host.
    #[serde(default)]
    pub host: String,

    /// HTTP methods the route answers to, in registration order.
    pub methods: Vec<String>,

    /// URI pattern, without a leading slash (the root route is `/`).
    pub uri: String,

    /// Route name, if one was assigned.
    #[serde(default)]
    pub name: Option<String>,

    /// Handler identifier (controller action or closure marker).
    pub action: String,

    /// Middleware stack, in application order.
    #[serde(default)]
    pub middleware: Vec<String>,
}

impl RouteDescriptor {
    /// Methods joined with `|`, the form used for display and filtering.
    pub fn methods_joined(&self) -> String {
        self.methods.join("|")
    }

    /// Methods joined with `,`, the form the gateway payload carries.
    pub fn methods_csv(&self) -> String {
        self.methods.join(",")
    }

    /// Middleware joined with `,`.
    pub fn middleware_joined(&self) -> String {
        self.middleware.join(",")
    }

    /// Route name, or the empty string for unnamed routes.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// String value of the field a listing sorts by.
    pub fn sort_value(&self, key: SortKey) -> String {
        match key {
            SortKey::Host => self.host.clone(),
            SortKey::Method => self.methods_joined(),
            SortKey::Uri => self.uri.clone(),
            SortKey::Name => self.name_or_empty().to_string(),
            SortKey::Action => self.action.clone(),
            SortKey::Middleware => self.middleware_joined(),
        }
    }
}

/// Field a route listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Default)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    /// Host constraint.
    Host,
    /// Pipe-joined method list.
    Method,
    /// URI pattern.
    #[default]
    Uri,
    /// Route name.
    Name,
    /// Handler identifier.
    Action,
    /// Comma-joined middleware stack.
    Middleware,
}
