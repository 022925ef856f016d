use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{navigate, price, routes};
use crate::config::Initializer;

/// Edrak portal command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct EdrakCommand {
    /// Portal options
    #[command(flatten)]
    pub portal: PortalOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Portal options
#[derive(Args, Debug)]
pub struct PortalOptions {
    /// Configuration file path
    #[arg(
        long,
        short = 'C',
        default_value = crate::config::DEFAULT_CONFIG_PATH,
        env = "EDRAK_CONFIG_PATH",
        global = true
    )]
    pub config: PathBuf,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate navigation attempts against the configured routes
    Navigate(navigate::NavigateCommand),
    /// Compute the price that applies now
    Price(price::PriceCommand),
    /// List registered routes
    Routes(routes::RoutesCommand),
}

impl EdrakCommand {
    pub async fn run(self) -> crate::Result<()> {
        let EdrakCommand { portal, command } = self;

        match command {
            Command::Navigate(navigate) => navigate.run(portal).await,
            Command::Price(price) => price.run().await,
            Command::Routes(routes) => routes.run(portal).await,
        }
    }
}

/// Parse command line args
pub fn parse() -> EdrakCommand {
    EdrakCommand::parse()
}

impl PortalOptions {
    pub(crate) async fn initializer(&self) -> crate::Result<Initializer> {
        Initializer::load_config_file(&self.config).await
    }
}
