// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Deploykit.toml manifest definitions.
//!
//! ```toml
//! [compiler]
//! version = "0.8.4"
//! optimizer = true
//!
//! [networks.bsc]
//! url = "https://data-seed-prebsc-1-s1.binance.org:8545"
//! chain_id = 97
//! accounts = ["env:PRIVATEKEY"]
//! gas_price = 50000000000
//! ```

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::core::{
    compiler::{CompilerSettings, DEFAULT_OPTIMIZER_RUNS, SOLIDITY_VERSION},
    credential::Credential,
    env::Environment,
    network::{NetworkError, NetworkProfile},
    registry::{Registry, RegistryError},
};

/// Filename for Deploykit.toml manifest files
pub const FILENAME: &str = "Deploykit.toml";

/// Prefix marking an account entry as an environment variable reference.
pub const ENV_PREFIX: &str = "env:";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing manifest {}", .0.display())]
    Missing(PathBuf),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlManifest {
    pub compiler: Option<TomlCompiler>,
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlCompiler {
    pub version: Option<String>,
    pub optimizer: Option<bool>,
    pub runs: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlNetwork {
    pub url: Option<String>,
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub accounts: Vec<String>,
    pub gas_price: Option<u128>,
}

pub fn load(path: impl AsRef<Path>) -> Result<TomlManifest, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_owned()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

impl TomlCompiler {
    fn settings(&self) -> CompilerSettings {
        CompilerSettings {
            language_version: self
                .version
                .clone()
                .unwrap_or_else(|| SOLIDITY_VERSION.to_owned()),
            optimizer_enabled: self.optimizer.unwrap_or(true),
            optimizer_runs: self.runs.unwrap_or(DEFAULT_OPTIMIZER_RUNS),
        }
    }
}

/// Entries without the `env:` prefix are literal keys, checked later by
/// [`NetworkProfile::validate`].
fn credential(entry: &str, env: &Environment) -> Option<Credential> {
    match entry.strip_prefix(ENV_PREFIX) {
        Some(var) if var.trim().is_empty() => None,
        Some(var) => Some(Credential::from_env(var.trim(), env)),
        None => Some(Credential::literal(entry)),
    }
}

impl Registry {
    /// Builds a registry from a manifest, reporting every missing or invalid field at once.
    pub fn from_manifest(
        manifest: &TomlManifest,
        env: &Environment,
    ) -> Result<Self, RegistryError> {
        let compiler = manifest
            .compiler
            .as_ref()
            .map(TomlCompiler::settings)
            .unwrap_or_default();

        let mut problems = Vec::new();
        let mut profiles = Vec::with_capacity(manifest.networks.len());
        for (name, network) in &manifest.networks {
            let Some(url) = &network.url else {
                problems.push(NetworkError::MissingField {
                    name: name.clone(),
                    field: "url",
                });
                continue;
            };
            let mut credentials = Vec::with_capacity(network.accounts.len());
            for (index, entry) in network.accounts.iter().enumerate() {
                match credential(entry, env) {
                    Some(credential) => credentials.push(credential),
                    None => problems.push(NetworkError::EmptyEnvVar {
                        name: name.clone(),
                        index,
                    }),
                }
            }
            profiles.push(
                NetworkProfile::builder()
                    .name(name.as_str())
                    .rpc_url(url.as_str())
                    .chain_id(network.chain_id)
                    .signing_credentials(credentials)
                    .gas_price_wei(network.gas_price)
                    .build(),
            );
        }

        Self::with_problems(compiler, profiles, problems)
    }
}
