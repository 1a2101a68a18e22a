// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::io;

use deploykit_tools::ops;

use crate::{common_args::RegistryArgs, error::DeploykitResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    registry: RegistryArgs,
}

pub fn exec(args: Args) -> DeploykitResult {
    let registry = args.registry.load()?;
    ops::print_networks(&registry, &mut io::stdout().lock())?;
    Ok(())
}
