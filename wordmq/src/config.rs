use std::path::Path;

use anyhow::Result;
use clap::Parser;
use serde_derive::Deserialize;

/// WordMQ word collecting server.
#[derive(Parser)]
#[command(name = "wordmq", version, about = "Word collecting queue server")]
pub(crate) struct CliConfig {
    /// Path to the config file
    #[arg(short, long, value_name = "FILE", default_value = "wordmq.toml")]
    pub(crate) config_file_path: String,
}

#[derive(Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) network: Network,
}

#[derive(Deserialize)]
pub(crate) struct Network {
    pub(crate) listen: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network: Network::default(),
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network {
            listen: "127.0.0.1:10000".to_string(),
        }
    }
}

/// Parses the TOML config file. A missing file is not an error, the
/// compiled-in defaults apply.
pub(crate) fn parse_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }

    let cfg = std::fs::read_to_string(path)?;

    Ok(toml::from_str(&cfg)?)
}

pub(crate) fn cli() -> CliConfig {
    CliConfig::parse()
}
