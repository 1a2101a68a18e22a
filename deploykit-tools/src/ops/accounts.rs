// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use alloy::providers::Provider;

use crate::{core::network::NetworkProfile, Result};

/// Writes the address of every signer of `profile`, one per line and in signer order.
///
/// The node behind `provider` is asked for its chain id first, so an unreachable endpoint or a
/// node on the wrong chain fails the command before anything is printed. Errors from the RPC
/// client and from key derivation are returned unchanged.
pub async fn list_accounts(
    profile: &NetworkProfile,
    provider: &impl Provider,
    out: &mut impl Write,
) -> Result<()> {
    let chain_id = provider.get_chain_id().await?;
    debug!(@grey, "connected to {} (chain id {})", profile.name(), chain_id);
    profile.check_chain_id(chain_id)?;

    for address in profile.addresses() {
        writeln!(out, "{}", address?)?;
    }
    Ok(())
}
