use tokio::sync::watch;

use crate::common::{debug, Time};
use crate::core::principal::{Principal, Role};

// Snapshot of the authentication collaborator as seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    // Credential validation is in flight.
    Pending,
    Unauthenticated,
    Authenticated(Principal),
}

impl AuthState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthState::Pending)
    }

    pub fn is_authenticated(&self) -> bool {
        match self {
            AuthState::Authenticated(principal) => principal.is_authenticated(),
            _ => false,
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AuthState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.principal().and_then(Principal::role)
    }
}

impl From<Option<Principal>> for AuthState {
    fn from(principal: Option<Principal>) -> Self {
        match principal {
            Some(principal) if principal.is_authenticated() => AuthState::Authenticated(principal),
            _ => AuthState::Unauthenticated,
        }
    }
}

// Ticket for one authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    generation: u64,
}

impl Resolution {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// Tracks the current AuthState. Only the latest resolution may update it.
#[derive(Debug)]
pub struct AuthTracker {
    generation: u64,
    in_flight: Option<u64>,
    state: watch::Sender<AuthState>,
}

impl AuthTracker {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::Unauthenticated);
        Self {
            generation: 0,
            in_flight: None,
            state,
        }
    }

    // Start resolving a credential. Supersedes any resolution still in flight.
    pub fn begin(&mut self) -> Resolution {
        self.generation += 1;
        if let Some(superseded) = self.in_flight.replace(self.generation) {
            debug!(superseded, generation = self.generation, "Supersede auth resolution");
        }
        self.state.send_replace(AuthState::Pending);

        Resolution {
            generation: self.generation,
        }
    }

    // Apply the result of a resolution. Returns false if the resolution is stale.
    pub fn complete(&mut self, resolution: Resolution, principal: Option<Principal>) -> bool {
        if self.in_flight != Some(resolution.generation) {
            debug!(
                stale = resolution.generation,
                current = self.generation,
                "Discard stale auth resolution"
            );
            return false;
        }
        self.in_flight = None;
        self.state.send_replace(AuthState::from(principal));
        true
    }

    pub fn logout(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.state.send_replace(AuthState::Unauthenticated);
    }

    // Current state. A principal whose token has expired is invalidated, and
    // subscribers observe the downgrade to unauthenticated.
    pub fn snapshot(&self, now: Time) -> AuthState {
        self.state.send_if_modified(|state| {
            let expired = matches!(
                state,
                AuthState::Authenticated(principal) if principal.is_expired(now)
            );
            if expired {
                debug!("Principal expired");
                *state = AuthState::Unauthenticated;
            }
            expired
        });
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}

impl Default for AuthTracker {
    fn default() -> Self {
        Self::new()
    }
}
