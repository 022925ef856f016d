use clap::Args;

use crate::cli::PortalOptions;
use crate::Result;

/// List registered routes
#[derive(Args, Debug)]
pub struct RoutesCommand {}

impl RoutesCommand {
    pub async fn run(self, portal: PortalOptions) -> Result<()> {
        let routes = portal.initializer().await?.route_table()?;

        for route in routes.routes() {
            println!("{}", route);
        }

        Ok(())
    }
}
