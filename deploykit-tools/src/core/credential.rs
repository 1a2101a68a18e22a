// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Signing credentials attached to a network profile.

use std::fmt;

use alloy::{
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};

use crate::{core::env::Environment, utils::decode0x};

/// First account of the local development node. Only valid on loopback endpoints.
pub const LOCAL_TEST_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(CredentialSource),
    #[error("malformed private key from {origin}: {reason}")]
    MalformedKey {
        origin: CredentialSource,
        reason: String,
    },
}

/// Where the value of a credential came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// Read from the named environment variable at load time.
    Env(String),
    /// Embedded in the configuration itself.
    Literal,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Env(var) => write!(f, "environment variable {var}"),
            Self::Literal => write!(f, "literal key"),
        }
    }
}

/// A private key, or the place a private key was expected to come from.
///
/// An unset environment variable still produces a credential; the error surfaces only when an
/// address or signer is derived from it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    source: CredentialSource,
    value: Option<String>,
}

impl Credential {
    /// Resolves `var` against the environment snapshot. Empty values count as unset.
    pub fn from_env(var: impl Into<String>, env: &Environment) -> Self {
        let var = var.into();
        let value = env
            .get(&var)
            .filter(|value| !value.trim().is_empty())
            .map(str::to_owned);
        Self {
            source: CredentialSource::Env(var),
            value,
        }
    }

    pub fn literal(key: impl Into<String>) -> Self {
        Self {
            source: CredentialSource::Literal,
            value: Some(key.into()),
        }
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.source, CredentialSource::Literal)
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// Builds a local signer from the private key.
    pub fn signer(&self) -> Result<PrivateKeySigner, CredentialError> {
        let value = self
            .value
            .as_ref()
            .ok_or_else(|| CredentialError::MissingCredential(self.source.clone()))?;
        let malformed = |reason: String| CredentialError::MalformedKey {
            origin: self.source.clone(),
            reason,
        };

        let bytes = decode0x(value).map_err(|err| malformed(err.to_string()))?;
        let key = B256::try_from(bytes.as_slice())
            .map_err(|_| malformed(format!("expected 32 bytes, got {}", bytes.len())))?;
        PrivateKeySigner::from_bytes(&key).map_err(|err| malformed(err.to_string()))
    }

    /// Derives the public address of the private key.
    pub fn address(&self) -> Result<Address, CredentialError> {
        Ok(self.signer()?.address())
    }
}

// Never print key material.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn local_test_key_derives_first_dev_account() {
        let credential = Credential::literal(LOCAL_TEST_KEY);
        assert_eq!(
            credential.address().unwrap(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn unset_variable_surfaces_missing_credential() {
        let credential = Credential::from_env("PRIVATEKEY", &Environment::default());
        assert!(!credential.is_resolved());
        let err = credential.address().unwrap_err();
        assert!(matches!(
            err,
            CredentialError::MissingCredential(CredentialSource::Env(ref var)) if var == "PRIVATEKEY"
        ));
    }

    #[test]
    fn empty_variable_counts_as_unset() {
        let env = Environment::default().with_var("PRIVATEKEY", "  ");
        let credential = Credential::from_env("PRIVATEKEY", &env);
        assert!(!credential.is_resolved());
    }

    #[test]
    fn key_without_prefix_is_accepted() {
        let env = Environment::default().with_var("PRIVATEKEY", &LOCAL_TEST_KEY[2..]);
        let credential = Credential::from_env("PRIVATEKEY", &env);
        assert_eq!(
            credential.address().unwrap(),
            Credential::literal(LOCAL_TEST_KEY).address().unwrap()
        );
    }

    #[test]
    fn malformed_keys_are_rejected() {
        let too_long = "ff".repeat(33);
        for key in ["0xnothex", "0x0102", too_long.as_str()] {
            let err = Credential::literal(key).signer().unwrap_err();
            assert!(
                matches!(err, CredentialError::MalformedKey { .. }),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn zero_key_is_rejected() {
        let err = Credential::literal("00".repeat(32)).signer().unwrap_err();
        assert!(matches!(err, CredentialError::MalformedKey { .. }));
    }

    #[test]
    fn debug_hides_key() {
        let printed = format!("{:?}", Credential::literal(LOCAL_TEST_KEY));
        assert!(!printed.contains(&LOCAL_TEST_KEY[2..]));
    }
}
