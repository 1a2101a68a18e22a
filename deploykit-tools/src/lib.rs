// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Network and compiler configuration for EVM contract deployments.
//!
//! The [`Registry`](core::registry::Registry) maps network names to the parameters needed to
//! reach and transact on them, alongside the global
//! [`CompilerSettings`](core::compiler::CompilerSettings). It is built once from an explicit
//! [`Environment`](core::env::Environment) snapshot and is read-only afterwards.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;

pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};
