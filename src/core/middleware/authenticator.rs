use async_trait::async_trait;
use chrono::Utc;

use crate::common::{debug, info, Result};
use crate::core::credential::{Credential, Provider, TokenStore};
use crate::core::middleware::Middleware;
use crate::core::{AuthState, UnitOfWork};

pub(crate) struct Authenticator<MW> {
    tokens: TokenStore,
    next: MW,
}

impl<MW> Authenticator<MW> {
    pub(crate) fn new(tokens: TokenStore, next: MW) -> Self {
        Self { tokens, next }
    }

    // Downgrade a snapshot whose principal expired after it was taken.
    fn revalidate(auth: &mut AuthState) {
        if let AuthState::Authenticated(principal) = auth {
            if principal.is_expired(Utc::now()) {
                debug!(?principal, "Principal expired");
                *auth = AuthState::Unauthenticated;
            }
        }
    }
}

#[async_trait]
impl<MW> Middleware for Authenticator<MW>
where
    MW: Middleware + Send + 'static,
{
    async fn apply(&mut self, mut uow: UnitOfWork) -> Result<()> {
        match uow {
            UnitOfWork::Authenticate(ref mut auth) => {
                let principal = match auth.request.credential() {
                    Credential::Token(token) => self.tokens.authenticate(&token, Utc::now()),
                };
                info!(
                    authenticated = principal.is_some(),
                    role = ?principal.as_ref().and_then(|p| p.role()),
                    "Try authenticate"
                );
                auth.send_response(Ok(principal))
            }
            UnitOfWork::Navigate(ref mut work) => {
                Self::revalidate(&mut work.auth);
                self.next.apply(uow).await
            }
            UnitOfWork::Quote(_) => self.next.apply(uow).await,
        }
    }
}
