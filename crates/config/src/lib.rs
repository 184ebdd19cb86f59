// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Configuration Module
//!
//! Protocol settings consumed by the token adapter: the selected network and
//! the address version byte used when deriving Base58Check addresses.
//!
//! ```toml
//! network = "TestNet"
//! address_version = 23
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Address version of Neo legacy networks (addresses start with `A`).
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x17;

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown network type: {0}")]
    UnknownNetwork(String),
}

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
    Private,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Private => write!(f, "private"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "private" | "privnet" => Ok(NetworkType::Private),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// Protocol settings relevant to token invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsFile")]
pub struct ProtocolSettings {
    pub network: NetworkType,
    pub address_version: u8,
}

impl ProtocolSettings {
    /// Settings of a well-known network. All legacy networks share one
    /// address version.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            address_version: DEFAULT_ADDRESS_VERSION,
        }
    }

    /// Parses settings from TOML text. Missing keys fall back to the
    /// defaults of the selected network.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::for_network(NetworkType::default())
    }
}

/// On-disk shape: every key optional.
#[derive(Deserialize)]
struct SettingsFile {
    #[serde(default)]
    network: NetworkType,
    address_version: Option<u8>,
}

impl From<SettingsFile> for ProtocolSettings {
    fn from(file: SettingsFile) -> Self {
        let defaults = ProtocolSettings::for_network(file.network);
        Self {
            network: file.network,
            address_version: file.address_version.unwrap_or(defaults.address_version),
        }
    }
}
