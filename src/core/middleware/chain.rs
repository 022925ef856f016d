use std::sync::Arc;

use crate::common::Result;
use crate::core::credential::TokenStore;
use crate::core::gate::Gate;
use crate::core::middleware::{Authenticator, Authorizer, Dispatcher, Logger, Middleware};
use crate::core::navigation::Redirects;
use crate::core::route::RouteTable;
use crate::core::UnitOfWork;

pub(crate) struct MiddlewareChain {
    root: Logger<Authenticator<Authorizer<Dispatcher>>>,
}

impl MiddlewareChain {
    pub(crate) fn new(
        tokens: TokenStore,
        gate: Gate,
        routes: Arc<RouteTable>,
        redirects: Redirects,
    ) -> Self {
        let dispatcher = Dispatcher::new();

        let authorizer = Authorizer::new(gate, routes, redirects, dispatcher);

        let authenticator = Authenticator::new(tokens, authorizer);

        let logger = Logger::new(authenticator);

        Self { root: logger }
    }

    pub(crate) async fn apply(&mut self, uow: UnitOfWork) -> Result<()> {
        self.root.apply(uow).await
    }
}
