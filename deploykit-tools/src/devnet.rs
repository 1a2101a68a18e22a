// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use alloy::providers::{Provider, ProviderBuilder};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::{
    credential::{Credential, LOCAL_TEST_KEY},
    network::NetworkProfile,
};

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

/// Chain id the devnode is started with.
pub const DEVNET_CHAIN_ID: u64 = 31337;

/// Manage an anvil devnode to run network diagnostics against.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new anvil devnode in the background.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"eth_chainId","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_entrypoint("anvil")
            .with_cmd(vec![
                "--host".to_owned(),
                "0.0.0.0".to_owned(),
                "--chain-id".to_owned(),
                DEVNET_CHAIN_ID.to_string(),
            ])
            .start()
            .await
            .wrap_err("failed to start anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get anvil RPC port")?;
        let rpc = format!("http://localhost:{port}");
        Ok(Node {
            _container: container,
            rpc,
        })
    }

    /// Get the anvil node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// A local profile pointing at this node, signing with the well-known test key.
    pub fn profile(&self, chain_id: Option<u64>) -> NetworkProfile {
        NetworkProfile::builder()
            .name("devnet")
            .rpc_url(self.rpc())
            .chain_id(chain_id)
            .signing_credentials(vec![Credential::literal(LOCAL_TEST_KEY)])
            .build()
    }

    /// Create a provider to send requests to the node.
    pub async fn create_provider(&self) -> Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(self.rpc()).await?;
        Ok(provider)
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::network::NetworkError, ops::list_accounts, Error};

    #[tokio::test]
    async fn lists_devnode_accounts() -> Result<()> {
        let devnode = Node::new().await?;
        let provider = devnode.create_provider().await?;
        let profile = devnode.profile(Some(DEVNET_CHAIN_ID));

        let mut out = Vec::new();
        list_accounts(&profile, &provider, &mut out).await?;
        assert_eq!(
            String::from_utf8(out)?,
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn rejects_wrong_chain() -> Result<()> {
        let devnode = Node::new().await?;
        let provider = devnode.create_provider().await?;
        let profile = devnode.profile(Some(97));

        let mut out = Vec::new();
        let err = list_accounts(&profile, &provider, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Network(NetworkError::ChainIdMismatch {
                expected: 97,
                actual: DEVNET_CHAIN_ID,
                ..
            })
        ));
        assert!(out.is_empty());
        Ok(())
    }
}
