use std::path::Path;

use tokio::fs;

use crate::client::Navigator;
use crate::common::{debug, Error, ErrorKind, Result};
use crate::config::Config;
use crate::core;
use crate::core::route::RouteTable;

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
}

impl Initializer {
    pub async fn load_config_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Ok(Self::load(path.as_ref()).await?)
    }

    async fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Load config");
        let raw = fs::read_to_string(path).await.map_err(|source| {
            Error::from(ErrorKind::Config {
                path: path.to_owned(),
                source,
            })
        })?;
        let config = serde_yaml::from_str::<Config>(&raw)?;

        Ok(Self { config })
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    // Validate the configured routes without starting the portal.
    pub fn route_table(&self) -> crate::Result<RouteTable> {
        Ok(RouteTable::from_entries(self.config.portal.routes.clone())?)
    }

    // Spawn the portal request loop on the current runtime.
    // The loop stops once every Navigator clone is dropped.
    pub fn run_portal(self) -> crate::Result<Navigator> {
        let portal = core::Builder::from_config(self.config.portal).build()?;
        let navigator = Navigator::new(portal.request_channel());

        tokio::spawn(portal.run());

        Ok(navigator)
    }
}
