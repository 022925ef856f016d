use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::navigation::Navigation;
use crate::core::pricing::PriceWindow;
use crate::core::{AuthState, Token};
use crate::{Result, Time};

mod navigator;
pub use navigator::Navigator;

#[async_trait]
pub trait Api {
    // Resolve a credential token and return the resulting auth state.
    async fn login(&self, token: Token) -> Result<AuthState>;
    fn logout(&self);
    async fn navigate(&self, path: &str) -> Result<Navigation>;
    async fn quote(&self, window: PriceWindow, now: Option<Time>) -> Result<Decimal>;
    fn state(&self) -> AuthState;
}
