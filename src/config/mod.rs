//! Service Configuration
//!
//! All tunables are collected into a single [`Config`] value built once at
//! startup and handed to each component. Nothing else in the crate reads the
//! process environment.
//!
//! ## Recognized variables
//! - `NOTION_TOKEN`, `NOTION_DB_ID` (required)
//! - `NOTION_BASE_URL` (default `https://api.notion.com/v1`)
//! - `API_KEY` (optional shared secret; unset means open access)
//! - `PORT`, `BIND_ADDR` (default `0.0.0.0:3000`)
//! - `SNAPSHOT_PATH` (default `data/index.json`)
//! - `SNAPSHOT_CACHE` (default `false`)

pub mod env;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthPolicy;
use env::{env_bool, env_parse, env_path, env_string, env_string_opt, Lookup};

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/index.json";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Connection settings for the remote Notion database.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub notion: NotionConfig,
    pub auth: AuthPolicy,
    pub bind_addr: SocketAddr,
    pub snapshot_path: PathBuf,
    /// Keep the parsed snapshot in memory until the file's mtime changes.
    pub snapshot_cache: bool,
}

impl Config {
    /// Builds the configuration from the process environment, after loading
    /// a `.env` file if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(env::process_env)
    }

    pub fn from_lookup(lookup: impl Lookup) -> Result<Self, ConfigError> {
        let token =
            env_string_opt(&lookup, "NOTION_TOKEN").ok_or(ConfigError::Missing("NOTION_TOKEN"))?;
        let database_id =
            env_string_opt(&lookup, "NOTION_DB_ID").ok_or(ConfigError::Missing("NOTION_DB_ID"))?;
        let base_url = env_string(&lookup, "NOTION_BASE_URL", DEFAULT_NOTION_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let ip: IpAddr = env_parse(&lookup, "BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port: u16 = env_parse(&lookup, "PORT", DEFAULT_PORT);

        Ok(Self {
            notion: NotionConfig {
                token,
                database_id,
                base_url,
            },
            auth: AuthPolicy::from_secret(env_string_opt(&lookup, "API_KEY")),
            bind_addr: SocketAddr::new(ip, port),
            snapshot_path: env_path(&lookup, "SNAPSHOT_PATH", DEFAULT_SNAPSHOT_PATH),
            snapshot_cache: env_bool(&lookup, "SNAPSHOT_CACHE", false),
        })
    }
}
