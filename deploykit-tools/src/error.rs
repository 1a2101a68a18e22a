// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    credential::CredentialError, env::EnvError, manifest::ManifestError, network::NetworkError,
    registry::RegistryError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Credential(#[from] CredentialError),
    #[error("{0}")]
    Env(#[from] EnvError),
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Registry(#[from] RegistryError),
}
