#![allow(clippy::module_inception)]

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod error;

pub use crate::error::EdrakError;
pub type Result<T, E = crate::error::EdrakError> = std::result::Result<T, E>;

pub use crate::core::gate::{decide, Decision, EmptyRoles, Gate, Policy, RouteRequirement};
pub use crate::core::pricing::{effective_price, Plan, PriceWindow};
pub use crate::core::principal::{Principal, Role, User};
pub use crate::core::AuthState;

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::internal::Error> = std::result::Result<T, E>;

    pub(crate) type Error = crate::error::internal::Error;
    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub type Time = chrono::DateTime<chrono::Utc>;

    pub use tracing::{debug, error, info, trace};
}

pub use crate::common::Time;
