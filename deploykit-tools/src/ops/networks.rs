// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Write};

use crate::{
    core::{network::NetworkProfile, registry::Registry},
    utils::format_or_auto,
};

/// Prints one line per network in name order. Key material is never printed.
pub fn print_networks(registry: &Registry, out: &mut impl Write) -> io::Result<()> {
    for profile in registry.profiles() {
        writeln!(out, "{}", describe(profile))?;
    }
    Ok(())
}

fn describe(profile: &NetworkProfile) -> String {
    let credentials = profile.signing_credentials();
    let resolved = credentials.iter().filter(|c| c.is_resolved()).count();
    format!(
        "{}: {} (chain id: {}, signers: {}/{}, gas price: {})",
        profile.name(),
        profile.rpc_url(),
        format_or_auto(profile.chain_id()),
        resolved,
        credentials.len(),
        format_or_auto(profile.gas_price_wei().map(|wei| format!("{wei} wei"))),
    )
}
