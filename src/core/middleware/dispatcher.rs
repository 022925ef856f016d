use async_trait::async_trait;

use crate::common::{ErrorKind, Result};
use crate::core::middleware::Middleware;
use crate::core::navigation::Navigation;
use crate::core::UnitOfWork;

pub(crate) struct Dispatcher {}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Middleware for Dispatcher {
    async fn apply(&mut self, uow: UnitOfWork) -> Result<()> {
        match uow {
            UnitOfWork::Navigate(mut work) => {
                let response = match work.request.route.take() {
                    Some(route) => Ok(Navigation::Render {
                        route,
                        path: work.request.path.clone(),
                    }),
                    None => Err(ErrorKind::Internal("navigate without authorized route".to_owned()).into()),
                };
                work.send_response(response)
            }
            UnitOfWork::Quote(mut work) => {
                let price = work.request.window.effective_price(work.request.now);
                work.send_response(Ok(price))
            }
            UnitOfWork::Authenticate(mut work) => work.send_response(Err(ErrorKind::Internal(
                "authenticate reached dispatcher".to_owned(),
            )
            .into())),
        }
    }
}
