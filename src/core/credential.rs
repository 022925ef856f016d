use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::common::{debug, Time};
use crate::core::principal::{Principal, Role, User};

pub(crate) enum Credential<'a> {
    Token(Cow<'a, str>),
}

pub(crate) trait Provider {
    fn credential(&self) -> Credential<'_>;
}

// Persisted credential token presented by the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl Provider for Token {
    fn credential(&self) -> Credential<'_> {
        Credential::Token(Cow::Borrowed(&self.0))
    }
}

// Token registered in the portal configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenEntry {
    pub token: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub expires_at: Option<Time>,
}

impl TokenEntry {
    fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct TokenStore {
    entries: HashMap<String, TokenEntry>,
}

impl TokenStore {
    pub(crate) fn new(entries: Vec<TokenEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.token.clone(), entry))
                .collect(),
        }
    }

    // Resolve a token into a principal. Unknown and expired tokens do not authenticate.
    pub(crate) fn authenticate(&self, token: &str, now: Time) -> Option<Principal> {
        let entry = self.entries.get(token)?;
        let user = entry.to_user();
        if user.is_expired(now) {
            debug!(user=%user.id, "Token expired");
            return None;
        }
        Some(Principal::User(user))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
