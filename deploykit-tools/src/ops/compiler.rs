// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Write};

use crate::core::compiler::CompilerSettings;

/// Prints the compiler settings applied to every network.
pub fn print_settings(settings: &CompilerSettings, out: &mut impl Write) -> io::Result<()> {
    debug!(@grey, "compiler settings apply to every network");
    writeln!(out, "version: {}", settings.language_version)?;
    writeln!(out, "optimizer: {}", settings.optimizer_enabled)?;
    if settings.optimizer_enabled {
        writeln!(out, "runs: {}", settings.optimizer_runs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_default_settings() {
        let mut out = Vec::new();
        print_settings(&CompilerSettings::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "version: 0.8.4\noptimizer: true\nruns: 200\n"
        );
    }
}
