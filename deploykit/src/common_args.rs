// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use alloy::providers::{Provider, ProviderBuilder};
use deploykit_tools::core::{
    env::Environment,
    manifest,
    network::NetworkProfile,
    registry::{Registry, RegistryError},
};

#[derive(Debug, clap::Args)]
pub struct RegistryArgs {
    /// Path to a Deploykit.toml manifest.
    ///
    /// Defaults to ./Deploykit.toml when present, otherwise the built-in networks are used.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File with additional environment variables. Variables of the process take precedence
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

impl RegistryArgs {
    /// Snapshots the environment and loads the registry from it.
    pub fn load(&self) -> deploykit_tools::Result<Registry> {
        let env = Environment::from_process().with_dotenv(&self.env_file)?;

        let default_manifest = Path::new(manifest::FILENAME);
        let path = match &self.config {
            Some(path) => Some(path.as_path()),
            None => default_manifest.is_file().then_some(default_manifest),
        };
        let registry = match path {
            Some(path) => {
                log::debug!("loading networks from {}", path.display());
                Registry::from_manifest(&manifest::load(path)?, &env)?
            }
            None => {
                log::debug!("using built-in networks");
                Registry::load(&env)?
            }
        };
        Ok(registry)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Name of the network to use
    #[arg(short, long)]
    network: String,
}

impl NetworkArgs {
    pub fn profile<'a>(&self, registry: &'a Registry) -> Result<&'a NetworkProfile, RegistryError> {
        registry.get_profile(&self.network)
    }

    pub async fn build_provider(&self, profile: &NetworkProfile) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(profile.rpc_url()).await?;
        Ok(provider)
    }
}
