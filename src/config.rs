use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dir::{ENV_FILE_NAME, app_user_data_file_path};
use crate::model::cluster::Cluster;
use crate::ui::theme::ThemeMode;
use serde::Deserialize;

/// Prefix of every variable read from the environment and the `.env` file.
pub const ENV_PREFIX: &str = "STT_";

const DEFAULT_BALANCE_REFRESH_SECS: u64 = 15;
const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 4;

#[derive(Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Cluster the application talks to for its whole lifetime
    pub cluster: Cluster,
    /// Overrides the public endpoint of `cluster`
    pub rpc_url: Option<String>,
    /// Solana CLI JSON keypair used by the keypair file wallet
    pub keypair_path: Option<PathBuf>,
    /// BIP-39 phrase used by the seed phrase wallet
    pub wallet_mnemonic: Option<String>,
    pub wallet_passphrase: Option<String>,
    pub balance_refresh_secs: u64,
    pub notification_ttl_secs: u64,
    /// Reconnect the last authorized wallet on startup
    pub auto_connect: bool,
    pub theme: ThemeMode,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    LoadError(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            rpc_url: None,
            keypair_path: None,
            wallet_mnemonic: None,
            wallet_passphrase: None,
            balance_refresh_secs: DEFAULT_BALANCE_REFRESH_SECS,
            notification_ttl_secs: DEFAULT_NOTIFICATION_TTL_SECS,
            auto_connect: true,
            theme: ThemeMode::Dark,
        }
    }
}

// secrets stay out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cluster", &self.cluster)
            .field("rpc_url", &self.rpc_url)
            .field("keypair_path", &self.keypair_path)
            .field(
                "wallet_mnemonic",
                &self.wallet_mnemonic.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "wallet_passphrase",
                &self.wallet_passphrase.as_ref().map(|_| "<redacted>"),
            )
            .field("balance_refresh_secs", &self.balance_refresh_secs)
            .field("notification_ttl_secs", &self.notification_ttl_secs)
            .field("auto_connect", &self.auto_connect)
            .field("theme", &self.theme)
            .finish()
    }
}

impl Config {
    /// Loads the configuration from the `.env` file in the app data directory
    /// and the process environment. Variables already set in the environment win.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file_path = app_user_data_file_path(ENV_FILE_NAME)
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        Self::load_from(&env_file_path)
    }

    pub fn load_from(env_file_path: &Path) -> Result<Self, ConfigError> {
        match dotenvy::from_path(env_file_path) {
            Ok(()) => tracing::info!("Successfully loaded .env file"),
            Err(err) => tracing::warn!(
                ?err,
                "Failed to load .env file. Continuing with environment variables."
            ),
        }

        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        tracing::info!(cluster = %config.cluster, "Configuration loaded");
        Ok(config)
    }

    /// Parses a configuration from explicit `STT_`-prefixed key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.balance_refresh_secs == 0 {
            return Err(ConfigError::Invalid(
                "balance_refresh_secs must be greater than zero".to_string(),
            ));
        }
        if self.notification_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "notification_ttl_secs must be greater than zero".to_string(),
            ));
        }
        if let Some(url) = &self.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "rpc_url must be an http(s) URL, got {}",
                    url
                )));
            }
        }
        Ok(())
    }

    /// Write the configuration to a `.env` file that [`Config::load_from`] reads back.
    pub fn save(&self, env_file_path: &Path) -> Result<(), ConfigError> {
        let mut env_file =
            File::create(env_file_path).map_err(|e| ConfigError::LoadError(e.to_string()))?;

        let mut lines = vec![
            format!("{}CLUSTER={}", ENV_PREFIX, self.cluster),
            format!("{}BALANCE_REFRESH_SECS={}", ENV_PREFIX, self.balance_refresh_secs),
            format!("{}NOTIFICATION_TTL_SECS={}", ENV_PREFIX, self.notification_ttl_secs),
            format!("{}AUTO_CONNECT={}", ENV_PREFIX, self.auto_connect),
            format!("{}THEME={}", ENV_PREFIX, self.theme.as_str()),
        ];
        if let Some(url) = &self.rpc_url {
            lines.push(format!("{}RPC_URL={}", ENV_PREFIX, url));
        }
        if let Some(path) = &self.keypair_path {
            lines.push(format!("{}KEYPAIR_PATH={}", ENV_PREFIX, path.display()));
        }
        if let Some(mnemonic) = &self.wallet_mnemonic {
            lines.push(format!("{}WALLET_MNEMONIC={}", ENV_PREFIX, quote_env_value(mnemonic)));
        }
        if let Some(passphrase) = &self.wallet_passphrase {
            let value = quote_env_value(passphrase);
            lines.push(format!("{}WALLET_PASSPHRASE={}", ENV_PREFIX, value));
        }

        for line in lines {
            writeln!(env_file, "{}", line).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        }

        tracing::info!("Successfully saved configuration to {:?}", env_file_path);
        Ok(())
    }

    /// RPC endpoint used for the session, honouring the override.
    pub fn endpoint(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.cluster.endpoint().to_string())
    }

    pub fn balance_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.balance_refresh_secs)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    /// Keypair path, falling back to the Solana CLI default `~/.config/solana/id.json`.
    pub fn keypair_path(&self) -> Option<PathBuf> {
        self.keypair_path.clone().or_else(default_keypair_path)
    }
}

/// Double-quoted `.env` value; dotenvy unescapes `\\`, `\"`, `\$` and `\n`.
fn quote_env_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

pub fn default_keypair_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("solana")
            .join("id.json")
    })
}
