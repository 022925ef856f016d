use clap::Args;

use crate::cli::PortalOptions;
use crate::client::Api;
use crate::common::info;
use crate::core::{AuthState, Token};
use crate::Result;

/// Evaluate navigation attempts
#[derive(Args, Debug)]
pub struct NavigateCommand {
    /// Credential token of the acting user
    #[arg(long, env = "EDRAK_TOKEN")]
    token: Option<String>,
    /// Paths to navigate to, in order
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<String>,
}

impl NavigateCommand {
    pub async fn run(self, portal: PortalOptions) -> Result<()> {
        let navigator = portal.initializer().await?.run_portal()?;

        if let Some(token) = self.token {
            let state = navigator.login(Token::new(token)).await?;
            match state {
                AuthState::Authenticated(ref principal) => {
                    info!(role = ?principal.role(), "Logged in");
                }
                _ => println!("token rejected, continuing unauthenticated"),
            }
        }

        for path in &self.paths {
            let navigation = navigator.navigate(path).await?;
            println!("{}\t{}", path, navigation);
        }

        Ok(())
    }
}
