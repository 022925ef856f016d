use std::sync::Arc;

use async_trait::async_trait;

use crate::common::{debug, Result};
use crate::core::gate::{Decision, Gate};
use crate::core::middleware::Middleware;
use crate::core::navigation::{Navigation, Redirects};
use crate::core::route::RouteTable;
use crate::core::UnitOfWork;

pub(crate) struct Authorizer<MW> {
    gate: Gate,
    routes: Arc<RouteTable>,
    redirects: Redirects,
    next: MW,
}

impl<MW> Authorizer<MW> {
    pub(crate) fn new(gate: Gate, routes: Arc<RouteTable>, redirects: Redirects, next: MW) -> Self {
        Self {
            gate,
            routes,
            redirects,
            next,
        }
    }
}

#[async_trait]
impl<MW> Middleware for Authorizer<MW>
where
    MW: Middleware + Send + 'static,
{
    async fn apply(&mut self, mut uow: UnitOfWork) -> Result<()> {
        let work = match uow {
            UnitOfWork::Navigate(ref mut work) => work,
            _ => return self.next.apply(uow).await,
        };

        let path = work.request.path.clone();
        let route = match self.routes.resolve(&path) {
            Some((route, _)) => route,
            None => {
                debug!(%path, "No route");
                return work.send_response(Ok(Navigation::NotFound { path }));
            }
        };

        let decision = self.gate.decide(&work.auth, route.policy(), &path);
        debug!(%path, route = route.name(), %decision, "Access decided");

        match decision {
            Decision::Allow => {
                work.request.route = Some(route.name().to_owned());
                self.next.apply(uow).await
            }
            Decision::Pending => work.send_response(Ok(Navigation::Pending)),
            decision => match self.redirects.location(&decision) {
                Some(location) => work.send_response(Ok(Navigation::Redirect { location, decision })),
                None => work.send_response(Ok(Navigation::Pending)),
            },
        }
    }
}
