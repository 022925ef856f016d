use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::core::principal::Role;

// Static access metadata attached to a protected destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteRequirement {
    #[serde(default = "RouteRequirement::default_require_auth")]
    pub require_auth: bool,
    // Empty means any authenticated role.
    #[serde(default, rename = "roles")]
    pub allowed_roles: BTreeSet<Role>,
}

impl RouteRequirement {
    fn default_require_auth() -> bool {
        true
    }

    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            require_auth: true,
            allowed_roles: roles.into_iter().collect(),
        }
    }

    pub fn optional_auth(mut self) -> Self {
        self.require_auth = false;
        self
    }
}

impl Default for RouteRequirement {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_roles: BTreeSet::new(),
        }
    }
}

// Requirement flavor of a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    Protected(RouteRequirement),
    // Only shown to unauthenticated users, e.g. login and register pages.
    PublicOnly,
    Public,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Protected(RouteRequirement::default())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Public => write!(f, "public"),
            Policy::PublicOnly => write!(f, "public-only"),
            Policy::Protected(requirement) => {
                write!(f, "protected")?;
                if !requirement.require_auth {
                    write!(f, " (auth optional)")?;
                }
                if !requirement.allowed_roles.is_empty() {
                    let roles = requirement
                        .allowed_roles
                        .iter()
                        .map(Role::as_str)
                        .collect::<Vec<_>>()
                        .join(",");
                    write!(f, " roles={}", roles)?;
                }
                Ok(())
            }
        }
    }
}
