// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

pub mod compiler;
pub mod credential;
pub mod env;
pub mod manifest;
pub mod network;
pub mod registry;
