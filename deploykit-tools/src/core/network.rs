// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::net::IpAddr;

use alloy::primitives::Address;
use reqwest::Url;
use typed_builder::TypedBuilder;

use crate::core::credential::{Credential, CredentialError};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("network {name:?}: missing required field `{field}`")]
    MissingField { name: String, field: &'static str },
    #[error("network {name:?} is defined more than once")]
    DuplicateName { name: String },
    #[error("network {name:?}: rpc url is empty")]
    EmptyRpcUrl { name: String },
    #[error("network {name:?}: invalid rpc url {url:?}: {reason}")]
    InvalidRpcUrl {
        name: String,
        url: String,
        reason: String,
    },
    #[error("network {name:?}: unsupported rpc url scheme {scheme:?}, expected http or https")]
    UnsupportedScheme { name: String, scheme: String },
    #[error("network {name:?}: literal signing keys are only allowed on loopback endpoints")]
    LiteralKeyOnRemote { name: String },
    #[error("network {name:?}: signer {index} is not a valid private key: {reason}")]
    MalformedLiteralKey {
        name: String,
        index: usize,
        reason: String,
    },
    #[error("network {name:?}: signer {index} names an empty environment variable")]
    EmptyEnvVar { name: String, index: usize },
    #[error("network {name:?} expects chain id {expected}, but the node reports {actual}")]
    ChainIdMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },
}

/// Checks that `endpoint` is a usable http(s) JSON-RPC url.
pub fn check_endpoint(name: &str, endpoint: &str) -> Result<Url, NetworkError> {
    if endpoint.trim().is_empty() {
        return Err(NetworkError::EmptyRpcUrl {
            name: name.to_owned(),
        });
    }
    let url = Url::parse(endpoint).map_err(|err| NetworkError::InvalidRpcUrl {
        name: name.to_owned(),
        url: endpoint.to_owned(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(NetworkError::UnsupportedScheme {
            name: name.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

/// Whether `url` points at the local machine.
pub fn is_loopback(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    match host.parse::<IpAddr>() {
        Ok(ip) => ip.is_loopback(),
        Err(_) => host.eq_ignore_ascii_case("localhost"),
    }
}

/// Parameters needed to reach and transact on one network.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct NetworkProfile {
    #[builder(setter(into))]
    name: String,
    #[builder(setter(into))]
    rpc_url: String,
    /// When absent, the chain id is taken from the node.
    #[builder(default)]
    chain_id: Option<u64>,
    /// Index 0 is the default signer.
    #[builder(default)]
    signing_credentials: Vec<Credential>,
    /// When absent, the gas price is taken from the node.
    #[builder(default)]
    gas_price_wei: Option<u128>,
}

impl NetworkProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn signing_credentials(&self) -> &[Credential] {
        &self.signing_credentials
    }

    pub fn gas_price_wei(&self) -> Option<u128> {
        self.gas_price_wei
    }

    /// Whether the rpc endpoint is on the local machine.
    pub fn is_local(&self) -> bool {
        Url::parse(&self.rpc_url)
            .map(|url| is_loopback(&url))
            .unwrap_or(false)
    }

    /// Derives the address of each signer, in signer order.
    ///
    /// Every call derives the addresses again from the credentials.
    pub fn addresses(&self) -> impl Iterator<Item = Result<Address, CredentialError>> + '_ {
        self.signing_credentials.iter().map(Credential::address)
    }

    /// Returns every problem with this profile.
    pub fn validate(&self) -> Vec<NetworkError> {
        let mut problems = Vec::new();
        match check_endpoint(&self.name, &self.rpc_url) {
            Ok(url) => {
                if !is_loopback(&url) && self.signing_credentials.iter().any(Credential::is_literal)
                {
                    problems.push(NetworkError::LiteralKeyOnRemote {
                        name: self.name.clone(),
                    });
                }
            }
            Err(err) => problems.push(err),
        }

        for (index, credential) in self.signing_credentials.iter().enumerate() {
            if !credential.is_literal() {
                continue;
            }
            if let Err(CredentialError::MalformedKey { reason, .. }) = credential.signer() {
                problems.push(NetworkError::MalformedLiteralKey {
                    name: self.name.clone(),
                    index,
                    reason,
                });
            }
        }
        problems
    }

    /// Checks the chain id reported by the node against the configured one.
    pub fn check_chain_id(&self, actual: u64) -> Result<(), NetworkError> {
        match self.chain_id {
            Some(expected) if expected != actual => Err(NetworkError::ChainIdMismatch {
                name: self.name.clone(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{credential::LOCAL_TEST_KEY, env::Environment};

    fn profile(url: &str, credentials: Vec<Credential>) -> NetworkProfile {
        NetworkProfile::builder()
            .name("test")
            .rpc_url(url)
            .signing_credentials(credentials)
            .build()
    }

    #[test]
    fn endpoints() {
        assert!(check_endpoint("a", "https://rpc.example.org").is_ok());
        assert!(check_endpoint("a", "http://127.0.0.1:8545").is_ok());
        assert!(matches!(
            check_endpoint("a", " "),
            Err(NetworkError::EmptyRpcUrl { .. })
        ));
        assert!(matches!(
            check_endpoint("a", "not a url"),
            Err(NetworkError::InvalidRpcUrl { .. })
        ));
        assert!(matches!(
            check_endpoint("a", "ws://127.0.0.1:8546"),
            Err(NetworkError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn loopback_hosts() {
        for url in [
            "http://127.0.0.1:8545",
            "http://localhost:8545",
            "http://[::1]:8545",
        ] {
            assert!(profile(url, vec![]).is_local(), "{url}");
        }
        for url in ["https://rpc-mumbai.maticvigil.com", "http://10.0.0.1:8545"] {
            assert!(!profile(url, vec![]).is_local(), "{url}");
        }
    }

    #[test]
    fn literal_keys_stay_on_loopback() {
        let local = profile("http://127.0.0.1:8545", vec![Credential::literal(LOCAL_TEST_KEY)]);
        assert!(local.validate().is_empty());

        let remote = profile(
            "https://data-seed-prebsc-1-s1.binance.org:8545",
            vec![Credential::literal(LOCAL_TEST_KEY)],
        );
        let problems = remote.validate();
        assert_eq!(problems.len(), 1);
        assert!(matches!(problems[0], NetworkError::LiteralKeyOnRemote { .. }));
    }

    #[test]
    fn malformed_literal_keys_fail_validation() {
        let profile = profile(
            "http://127.0.0.1:8545",
            vec![
                Credential::literal(LOCAL_TEST_KEY),
                Credential::literal("0xnothex"),
                Credential::from_env("PRIVATEKEY", &Environment::default()),
                Credential::literal("0x0102"),
            ],
        );
        let problems = profile.validate();
        assert_eq!(problems.len(), 2);
        assert!(matches!(
            problems[0],
            NetworkError::MalformedLiteralKey { index: 1, .. }
        ));
        assert!(matches!(
            problems[1],
            NetworkError::MalformedLiteralKey { index: 3, .. }
        ));
        assert!(!problems[1].to_string().contains("0102"));
    }

    #[test]
    fn addresses_follow_signer_order() {
        let env = Environment::default();
        let profile = profile(
            "http://127.0.0.1:8545",
            vec![
                Credential::literal(LOCAL_TEST_KEY),
                Credential::from_env("PRIVATEKEY", &env),
            ],
        );
        let mut addresses = profile.addresses();
        assert!(addresses.next().unwrap().is_ok());
        assert!(matches!(
            addresses.next().unwrap(),
            Err(CredentialError::MissingCredential(_))
        ));
        assert!(addresses.next().is_none());
    }

    #[test]
    fn no_signers_yield_no_addresses() {
        assert_eq!(profile("http://127.0.0.1:8545", vec![]).addresses().count(), 0);
    }

    #[test]
    fn chain_id_check() {
        let pinned = NetworkProfile::builder()
            .name("bsc")
            .rpc_url("https://data-seed-prebsc-1-s1.binance.org:8545")
            .chain_id(Some(97))
            .build();
        assert!(pinned.check_chain_id(97).is_ok());
        assert!(matches!(
            pinned.check_chain_id(56),
            Err(NetworkError::ChainIdMismatch {
                expected: 97,
                actual: 56,
                ..
            })
        ));
        assert!(profile("http://127.0.0.1:8545", vec![]).check_chain_id(1).is_ok());
    }
}
