mod initialize;
pub use initialize::Initializer;

mod config;
pub use config::Config;

pub mod env {
    pub const LOG_DIRECTIVE: &str = "EDRAK_LOG";
    pub const CONFIG_PATH: &str = "EDRAK_CONFIG_PATH";
    pub const TOKEN: &str = "EDRAK_TOKEN";
}

pub const DEFAULT_CONFIG_PATH: &str = "./files/config.yaml";
