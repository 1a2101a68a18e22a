// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Terminal colors for log and diagnostic output.

pub const CLEAR: &str = "\x1b[0;0m";
pub const GREY: &str = "\x1b[0;90m";

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String {
        self.color(GREY)
    }
}

impl<T: AsRef<str>> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{}{CLEAR}", self.as_ref())
    }
}
