// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::io;

use deploykit_tools::ops;

use crate::{
    common_args::{NetworkArgs, RegistryArgs},
    error::DeploykitResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    registry: RegistryArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> DeploykitResult {
    let registry = args.registry.load()?;
    let profile = args.network.profile(&registry)?;
    let provider = args.network.build_provider(profile).await?;
    ops::list_accounts(profile, &provider, &mut io::stdout()).await?;
    Ok(())
}
