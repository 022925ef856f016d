use std::sync::Arc;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::common::{error, info, Result};
use crate::core::credential::TokenStore;
use crate::core::gate::Gate;
use crate::core::middleware::MiddlewareChain;
use crate::core::route::RouteTable;
use crate::core::{Config, UnitOfWork};

pub(crate) struct Builder {
    config: Option<Config>,
    request_channel_buffer: usize,
}

impl Builder {
    pub(crate) fn from_config(config: Config) -> Self {
        let mut builder = Builder::new();
        builder.config = Some(config);
        builder
    }

    pub(crate) fn build(self) -> Result<Portal> {
        let (send, recv) = mpsc::channel(self.request_channel_buffer);

        let config = self.config.unwrap_or_default();

        let routes = Arc::new(RouteTable::from_entries(config.routes)?);
        let tokens = TokenStore::new(config.tokens);
        let gate = Gate::new(config.empty_roles);

        info!(
            routes = routes.len(),
            tokens = tokens.len(),
            empty_roles = ?gate.empty_roles(),
            "Portal built"
        );

        let mw = MiddlewareChain::new(tokens, gate, Arc::clone(&routes), config.redirects);

        Ok(Portal {
            request_send: send,
            request_recv: recv,
            middlewares: mw,
        })
    }

    fn new() -> Self {
        Self {
            config: None,
            request_channel_buffer: 1024,
        }
    }
}

pub(crate) struct Portal {
    request_recv: Receiver<UnitOfWork>,
    request_send: Sender<UnitOfWork>,
    middlewares: MiddlewareChain,
}

impl Portal {
    pub(crate) fn request_channel(&self) -> Sender<UnitOfWork> {
        self.request_send.clone()
    }

    // Runs until every request sender has been dropped.
    pub(crate) async fn run(self) {
        let Portal {
            mut request_recv,
            request_send,
            mut middlewares,
        } = self;
        drop(request_send);

        info!("Portal running");

        while let Some(request) = request_recv.recv().await {
            if let Err(err) = middlewares.apply(request).await {
                error!("Handle request {}", err);
            }
        }

        info!("Portal stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Navigation;
    use crate::core::principal::{Principal, Role, User};
    use crate::core::{AuthState, Token};
    use rust_decimal::Decimal;

    const CONFIG: &str = r#"
tokens:
  - { token: t-student, id: u1, name: Sara, role: student }
routes:
  - { name: login, path: /login, access: public_only }
  - { name: admin, path: "/admin/*", roles: [admin] }
"#;

    fn portal() -> Portal {
        let config: Config = serde_yaml::from_str(CONFIG).unwrap();
        Builder::from_config(config).build().unwrap()
    }

    fn student() -> AuthState {
        AuthState::Authenticated(Principal::User(User::new("u1", "Sara", Some(Role::Student))))
    }

    #[test]
    fn handle_units_of_work() {
        tokio_test::block_on(async move {
            let portal = portal();
            let tx = portal.request_channel();
            let handle = tokio::spawn(portal.run());

            let (uow, rx) = UnitOfWork::new_authenticate(AuthState::Pending, Token::new("t-student"));
            tx.send(uow).await.unwrap();
            let principal = rx.await.unwrap().unwrap().unwrap();
            assert_eq!(principal.role(), Some(Role::Student));

            let (uow, rx) = UnitOfWork::new_navigate(student(), "/admin/features");
            tx.send(uow).await.unwrap();
            assert_eq!(
                rx.await.unwrap().unwrap().location(),
                Some("/unauthorized")
            );

            let (uow, rx) = UnitOfWork::new_navigate(AuthState::Unauthenticated, "/login");
            tx.send(uow).await.unwrap();
            assert_eq!(
                rx.await.unwrap().unwrap(),
                Navigation::Render {
                    route: "login".into(),
                    path: "/login".into()
                }
            );

            let (uow, rx) = UnitOfWork::new_navigate(student(), "/missing");
            tx.send(uow).await.unwrap();
            assert_eq!(
                rx.await.unwrap().unwrap(),
                Navigation::NotFound {
                    path: "/missing".into()
                }
            );

            let window = crate::core::pricing::PriceWindow::new(Decimal::from(10), Decimal::from(5));
            let (uow, rx) = UnitOfWork::new_quote(AuthState::Unauthenticated, window, chrono::Utc::now());
            tx.send(uow).await.unwrap();
            assert_eq!(rx.await.unwrap().unwrap(), Decimal::from(10));

            drop(tx);
            handle.await.unwrap();
        })
    }

    #[test]
    fn invalid_route_fails_build() {
        let config: Config =
            serde_yaml::from_str("routes: [{ name: bad, path: \"/a/*/b\" }]").unwrap();
        assert!(Builder::from_config(config).build().is_err());
    }
}
