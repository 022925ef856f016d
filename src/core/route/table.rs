use std::fmt;

use serde::Deserialize;

use crate::common::Result;
use crate::core::gate::{Policy, RouteRequirement};
use crate::core::route::{Params, RoutePattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    #[default]
    Protected,
    PublicOnly,
    Public,
}

// Route as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub access: Access,
    #[serde(flatten)]
    pub requirement: RouteRequirement,
}

#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: RoutePattern,
    policy: Policy,
}

impl Route {
    pub fn new(name: impl Into<String>, pattern: RoutePattern, policy: Policy) -> Self {
        Self {
            name: name.into(),
            pattern,
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {:<32} {}", self.name, self.pattern, self.policy)
    }
}

impl Route {
    pub(crate) fn from_entry(entry: RouteEntry) -> Result<Self> {
        let pattern = RoutePattern::parse(&entry.path)?;
        let policy = match entry.access {
            Access::Protected => Policy::Protected(entry.requirement),
            Access::PublicOnly => Policy::PublicOnly,
            Access::Public => Policy::Public,
        };
        Ok(Route::new(entry.name, pattern, policy))
    }
}

// Registered destinations, matched in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub(crate) fn from_entries(entries: Vec<RouteEntry>) -> Result<Self> {
        let routes = entries
            .into_iter()
            .map(Route::from_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { routes })
    }

    pub fn register(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn resolve(&self, path: &str) -> Option<(&Route, Params)> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|params| (route, params)))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
