// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Registry of named networks and the global compiler settings.

use std::collections::BTreeMap;

use crate::core::{
    compiler::CompilerSettings,
    credential::{Credential, LOCAL_TEST_KEY},
    env::Environment,
    network::{NetworkError, NetworkProfile},
};

/// Environment variable holding the default signer's private key.
pub const PRIVATE_KEY_VAR: &str = "PRIVATEKEY";

/// Name of the local development network, the only one carrying a literal key.
pub const LOCAL_NETWORK: &str = "hh";

const DEFAULT_GAS_PRICE_WEI: u128 = 50_000_000_000;
const LOCAL_GAS_PRICE_WEI: u128 = 500_000_000_000;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown network {name:?} (available: {})", .available.join(", "))]
    MissingProfile {
        name: String,
        available: Vec<String>,
    },
    #[error("invalid network configuration:{}", format_problems(.0))]
    Invalid(Vec<NetworkError>),
}

fn format_problems(problems: &[NetworkError]) -> String {
    problems
        .iter()
        .map(|problem| format!("\n  - {problem}"))
        .collect()
}

/// Named network profiles plus the compiler settings shared by all of them.
///
/// There is no way to change a registry once it is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    compiler: CompilerSettings,
    networks: BTreeMap<String, NetworkProfile>,
}

impl Registry {
    /// Builds the built-in registry from the environment snapshot.
    ///
    /// Unset variables produce unresolved credentials and never fail the load.
    pub fn load(env: &Environment) -> Result<Self, RegistryError> {
        let private_key = || Credential::from_env(PRIVATE_KEY_VAR, env);
        let profiles = [
            NetworkProfile::builder()
                .name("indranet")
                .rpc_url("https://indranet-rpc.selendra.org")
                .chain_id(Some(222))
                .signing_credentials(vec![private_key()])
                .gas_price_wei(Some(DEFAULT_GAS_PRICE_WEI))
                .build(),
            NetworkProfile::builder()
                .name("bsc")
                .rpc_url("https://data-seed-prebsc-1-s1.binance.org:8545")
                .chain_id(Some(97))
                .signing_credentials(vec![private_key()])
                .gas_price_wei(Some(DEFAULT_GAS_PRICE_WEI))
                .build(),
            NetworkProfile::builder()
                .name(LOCAL_NETWORK)
                .rpc_url("http://127.0.0.1:8545")
                .chain_id(Some(31337))
                .signing_credentials(vec![private_key(), Credential::literal(LOCAL_TEST_KEY)])
                .gas_price_wei(Some(LOCAL_GAS_PRICE_WEI))
                .build(),
            NetworkProfile::builder()
                .name("matic")
                .rpc_url("https://rpc-mumbai.maticvigil.com")
                .signing_credentials(vec![private_key()])
                .build(),
        ];
        Self::new(CompilerSettings::default(), profiles)
    }

    /// Builds a registry, reporting every invalid profile at once.
    pub fn new(
        compiler: CompilerSettings,
        profiles: impl IntoIterator<Item = NetworkProfile>,
    ) -> Result<Self, RegistryError> {
        Self::with_problems(compiler, profiles, Vec::new())
    }

    /// Like [`Registry::new`], but also fails on `problems` found before the profiles were built.
    pub(crate) fn with_problems(
        compiler: CompilerSettings,
        profiles: impl IntoIterator<Item = NetworkProfile>,
        mut problems: Vec<NetworkError>,
    ) -> Result<Self, RegistryError> {
        let mut networks = BTreeMap::new();
        for profile in profiles {
            problems.extend(profile.validate());
            let name = profile.name().to_owned();
            if networks.insert(name.clone(), profile).is_some() {
                problems.push(NetworkError::DuplicateName { name });
            }
        }
        if !problems.is_empty() {
            return Err(RegistryError::Invalid(problems));
        }

        let names: Vec<_> = networks.keys().map(String::as_str).collect();
        debug!(@grey, "loaded {} network(s): {}", names.len(), names.join(", "));
        Ok(Self { compiler, networks })
    }

    /// Looks up a profile by its exact name.
    pub fn get_profile(&self, name: &str) -> Result<&NetworkProfile, RegistryError> {
        self.networks
            .get(name)
            .ok_or_else(|| RegistryError::MissingProfile {
                name: name.to_owned(),
                available: self.networks.keys().cloned().collect(),
            })
    }

    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    /// Profiles in name order.
    pub fn profiles(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.networks.values()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
