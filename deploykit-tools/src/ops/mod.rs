// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

pub use accounts::list_accounts;
pub use compiler::print_settings;
pub use networks::print_networks;

pub mod accounts;

mod compiler;
mod networks;
