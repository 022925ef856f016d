mod portal;
pub(crate) use self::portal::Builder;

mod config;
pub use self::config::Config;

pub mod auth;
pub use self::auth::{AuthState, AuthTracker};

pub mod credential;
pub use self::credential::{Token, TokenEntry};

pub mod gate;

pub mod navigation;

pub mod pricing;

pub mod principal;

pub mod route;

mod uow;
pub(crate) use self::uow::UnitOfWork;

mod middleware;
