use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::{mpsc::Sender, oneshot, watch};

use crate::client::Api;
use crate::common::{debug, Error, ErrorKind, Time};
use crate::core::navigation::Navigation;
use crate::core::pricing::PriceWindow;
use crate::core::{AuthState, AuthTracker, Token, UnitOfWork};
use crate::Result;

/// Client handle to a running portal.
///
/// Clones share the same auth tracker, so a login started from one clone
/// supersedes a login still in flight on another.
#[derive(Clone)]
pub struct Navigator {
    request_sender: Sender<UnitOfWork>,
    tracker: Arc<Mutex<AuthTracker>>,
}

impl Navigator {
    pub(crate) fn new(request_sender: Sender<UnitOfWork>) -> Self {
        Self {
            request_sender,
            tracker: Arc::new(Mutex::new(AuthTracker::new())),
        }
    }

    // Observe auth state changes, including downgrades of expired principals.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        let tracker = self.tracker();
        tracker.snapshot(Utc::now());
        tracker.subscribe()
    }

    fn tracker(&self) -> MutexGuard<'_, AuthTracker> {
        self.tracker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn request<T>(
        &self,
        uow: UnitOfWork,
        rx: oneshot::Receiver<crate::common::Result<T>>,
    ) -> crate::common::Result<T> {
        self.request_sender
            .send(uow)
            .await
            .map_err(|_| Error::from(ErrorKind::PortalClosed))?;
        rx.await.map_err(|_| Error::from(ErrorKind::PortalClosed))?
    }
}

#[async_trait]
impl Api for Navigator {
    async fn login(&self, token: Token) -> Result<AuthState> {
        let resolution = self.tracker().begin();

        let (uow, rx) = UnitOfWork::new_authenticate(AuthState::Pending, token);
        let result = self.request(uow, rx).await;

        let mut tracker = self.tracker();
        match result {
            Ok(principal) => {
                if !tracker.complete(resolution, principal) {
                    debug!(generation = resolution.generation(), "Login superseded");
                }
                Ok(tracker.snapshot(Utc::now()))
            }
            Err(err) => {
                // Fail closed instead of staying pending.
                tracker.complete(resolution, None);
                Err(err.into())
            }
        }
    }

    fn logout(&self) {
        self.tracker().logout();
    }

    async fn navigate(&self, path: &str) -> Result<Navigation> {
        let auth = self.state();
        let (uow, rx) = UnitOfWork::new_navigate(auth, path);
        Ok(self.request(uow, rx).await?)
    }

    async fn quote(&self, window: PriceWindow, now: Option<Time>) -> Result<Decimal> {
        let (uow, rx) =
            UnitOfWork::new_quote(self.state(), window, now.unwrap_or_else(Utc::now));
        Ok(self.request(uow, rx).await?)
    }

    fn state(&self) -> AuthState {
        self.tracker().snapshot(Utc::now())
    }
}
