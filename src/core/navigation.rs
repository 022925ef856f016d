use std::fmt;

use serde::Deserialize;
use url::form_urlencoded;

use crate::core::gate::Decision;

// Locations the client is sent to for each redirect decision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Redirects {
    pub login: String,
    pub unauthorized: String,
    pub app: String,
}

impl Default for Redirects {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            unauthorized: "/unauthorized".to_owned(),
            app: "/dashboard".to_owned(),
        }
    }
}

impl Redirects {
    // Location for a redirect decision, None for Pending and Allow.
    pub fn location(&self, decision: &Decision) -> Option<String> {
        match decision {
            Decision::Pending | Decision::Allow => None,
            Decision::RedirectToLogin { return_path } => {
                let encoded: String = form_urlencoded::byte_serialize(return_path.as_bytes()).collect();
                Some(format!("{}?redirect={}", self.login, encoded))
            }
            Decision::RedirectToUnauthorized => Some(self.unauthorized.clone()),
            Decision::RedirectToApp => Some(self.app.clone()),
        }
    }
}

// What the client should do after a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Pending,
    Render { route: String, path: String },
    Redirect { location: String, decision: Decision },
    NotFound { path: String },
}

impl Navigation {
    pub fn location(&self) -> Option<&str> {
        match self {
            Navigation::Redirect { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Pending => write!(f, "pending"),
            Navigation::Render { route, path } => write!(f, "render {} ({})", route, path),
            Navigation::Redirect { location, .. } => write!(f, "redirect {}", location),
            Navigation::NotFound { path } => write!(f, "not found {}", path),
        }
    }
}
