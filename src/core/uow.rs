use std::fmt;

use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::common::{ErrorKind, Result, Time};
use crate::core::credential::Token;
use crate::core::navigation::Navigation;
use crate::core::pricing::PriceWindow;
use crate::core::principal::Principal;
use crate::core::AuthState;

pub(crate) enum UnitOfWork {
    Authenticate(Work<Token, Option<Principal>>),
    Navigate(Work<Navigate, Navigation>),
    Quote(Work<Quote, Decimal>),
}

pub(crate) struct Work<Req, Res> {
    // Auth snapshot taken by the caller when the unit was created.
    pub(crate) auth: AuthState,
    pub(crate) request: Req,
    // Wrap with option so that response can be sent via mut reference.
    pub(crate) response_sender: Option<oneshot::Sender<Result<Res>>>,
}

impl<Req, Res> Work<Req, Res> {
    pub(crate) fn send_response(&mut self, response: Result<Res>) -> Result<()> {
        self.response_sender
            .take()
            .ok_or_else(|| ErrorKind::Internal("response already sent".to_owned()))?
            .send(response)
            .map_err(|_| ErrorKind::Internal("send response".to_owned()).into())
    }
}

pub(crate) struct Navigate {
    pub(crate) path: String,
    // Set by the authorizer once the destination is resolved and allowed.
    pub(crate) route: Option<String>,
}

pub(crate) struct Quote {
    pub(crate) window: PriceWindow,
    pub(crate) now: Time,
}

impl UnitOfWork {
    pub(crate) fn new_authenticate(
        auth: AuthState,
        token: Token,
    ) -> (UnitOfWork, oneshot::Receiver<Result<Option<Principal>>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::Authenticate(Work {
                auth,
                request: token,
                response_sender: Some(tx),
            }),
            rx,
        )
    }

    pub(crate) fn new_navigate(
        auth: AuthState,
        path: impl Into<String>,
    ) -> (UnitOfWork, oneshot::Receiver<Result<Navigation>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::Navigate(Work {
                auth,
                request: Navigate {
                    path: path.into(),
                    route: None,
                },
                response_sender: Some(tx),
            }),
            rx,
        )
    }

    pub(crate) fn new_quote(
        auth: AuthState,
        window: PriceWindow,
        now: Time,
    ) -> (UnitOfWork, oneshot::Receiver<Result<Decimal>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::Quote(Work {
                auth,
                request: Quote { window, now },
                response_sender: Some(tx),
            }),
            rx,
        )
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnitOfWork::Authenticate(_) => {
                write!(f, "Authenticate")
            }
            UnitOfWork::Navigate(navigate) => {
                write!(f, "Navigate {}", navigate.request.path)
            }
            UnitOfWork::Quote(quote) => {
                write!(f, "Quote at {}", quote.request.now.to_rfc3339())
            }
        }
    }
}
