use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{Network, NetworkRegistry};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    pub rpc: Option<String>,
}

/// Override for one of the two built-in networks
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkOverride {
    pub chain_id: u64,
    pub rpc: Option<String>,
    pub explorer: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_strict_checksum")]
    pub strict_checksum: bool,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub networks: Vec<NetworkOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_checksum: default_strict_checksum(),
            wallet: WalletConfig::default(),
            networks: Vec::new(),
        }
    }
}

fn default_strict_checksum() -> bool {
    true
}

impl Config {
    /// Built-in networks with overrides applied, first entry active
    pub fn registry(&self) -> Result<NetworkRegistry> {
        let mut networks = [Network::base_sepolia(), Network::base_mainnet()];

        for entry in &self.networks {
            let Some(network) = networks.iter_mut().find(|n| n.chain_id == entry.chain_id) else {
                warn!(chain_id = entry.chain_id, "ignoring override for unsupported chain");
                continue;
            };
            if let Some(rpc) = &entry.rpc {
                network.rpc_endpoint = parse_url(rpc)
                    .with_context(|| format!("rpc for chain {}", entry.chain_id))?;
            }
            if let Some(explorer) = &entry.explorer {
                parse_url(explorer)
                    .with_context(|| format!("explorer for chain {}", entry.chain_id))?;
                network.explorer_base_url = explorer.trim_end_matches('/').to_string();
            }
            if let Some(label) = entry.label.as_ref().filter(|l| !l.trim().is_empty()) {
                network.label = label.trim().to_string();
            }
        }

        Ok(NetworkRegistry::new(networks))
    }

    pub fn wallet_url(&self) -> Result<Option<Url>> {
        self.wallet
            .rpc
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_url(s).context("wallet rpc"))
            .transpose()
    }
}

/// Load from an explicit path, or the first resolved default location.
/// A missing default file yields defaults; a broken one is an error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    let content = fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&content).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Default config location. `DRIFTWOOD_CONFIG` is resolved by the CLI into
/// the explicit path and is not consulted here.
pub fn config_path() -> Option<PathBuf> {
    default_path(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn default_path(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(xdg) = xdg {
        return Some(xdg.join("driftwood").join("config.toml"));
    }
    if let Some(home) = home {
        return Some(home.join(".config").join("driftwood").join("config.toml"));
    }

    directories::ProjectDirs::from("org", "driftwood", "driftwood")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value.trim()).with_context(|| format!("invalid URL {:?}", value))
}
