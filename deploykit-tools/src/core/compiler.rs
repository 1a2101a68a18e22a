// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::fmt;

/// Solidity compiler release used for every network.
pub const SOLIDITY_VERSION: &str = "0.8.4";

/// Optimizer runs applied when the optimizer is enabled without an explicit count.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Global compiler settings, shared by all networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerSettings {
    pub language_version: String,
    pub optimizer_enabled: bool,
    pub optimizer_runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            language_version: SOLIDITY_VERSION.to_owned(),
            optimizer_enabled: true,
            optimizer_runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

impl fmt::Display for CompilerSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "solc {}", self.language_version)?;
        if self.optimizer_enabled {
            write!(f, " (optimizer: enabled, {} runs)", self.optimizer_runs)
        } else {
            write!(f, " (optimizer: disabled)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_optimizer() {
        let settings = CompilerSettings::default();
        assert_eq!(settings.language_version, "0.8.4");
        assert!(settings.optimizer_enabled);
        assert_eq!(
            settings.to_string(),
            "solc 0.8.4 (optimizer: enabled, 200 runs)"
        );
    }

    #[test]
    fn display_omits_runs_when_disabled() {
        let settings = CompilerSettings {
            optimizer_enabled: false,
            ..Default::default()
        };
        assert_eq!(settings.to_string(), "solc 0.8.4 (optimizer: disabled)");
    }
}
