use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use frenzy_nav::session::UserStatus;

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct AccessControl {
    // Fixed session reported to the navigation shell. Development only.
    #[serde(default)]
    pub insecure_session: Option<UserStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    "user_id_placeholder".to_owned()
}

fn default_index_file() -> std::path::PathBuf {
    "firestore.indexes.json".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub db_path: String,
    #[serde(default = "default_index_file")]
    pub index_file: std::path::PathBuf,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub access_control: AccessControl,
}

pub enum Insecure {
    Deny,
    Allow,
}

pub fn validate(cfg: &Config, insecure: Insecure) -> Result<(), String> {
    if cfg.db_path.is_empty() {
        return Err("db_path must not be empty".to_owned());
    }
    if cfg.seed.user_id.is_empty() {
        return Err("seed.user_id must not be empty".to_owned());
    }
    match insecure {
        Insecure::Allow => {}
        Insecure::Deny => {
            if cfg.access_control.insecure_session.is_some() {
                return Err("insecure_session is not allowed in secure mode".to_owned());
            }
        }
    }
    Ok(())
}

pub async fn load(path: impl AsRef<std::path::Path>, insecure: Insecure) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let config = tokio::fs::read_to_string(path)
        .await
        .context(format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&config).context("Failed to parse config")?;
    validate(&config, insecure).map_err(|e| anyhow!("Config validation failed: {e}"))?;
    Ok(config)
}
