use serde::Deserialize;

use crate::core::credential::TokenEntry;
use crate::core::gate::EmptyRoles;
use crate::core::navigation::Redirects;
use crate::core::route::RouteEntry;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub tokens: Vec<TokenEntry>,
    pub routes: Vec<RouteEntry>,
    pub redirects: Redirects,
    pub empty_roles: EmptyRoles,
}
