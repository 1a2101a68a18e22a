// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use crate::error::DeploykitResult;

mod accounts;
mod compiler;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the account addresses of a network
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Print the compiler settings shared by all networks
    Compiler(compiler::Args),
    /// List the configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> DeploykitResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args).await,
        Command::Compiler(args) => compiler::exec(args),
        Command::Networks(args) => networks::exec(args),
    }
}
