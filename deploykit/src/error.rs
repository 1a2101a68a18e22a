// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use deploykit_tools::core::{manifest::ManifestError, registry::RegistryError};

pub type DeploykitResult = Result<(), DeploykitError>;

/// Exit code for configuration errors, distinct from failures reaching the network.
const CONFIG_ERROR: u8 = 2;

#[derive(Debug)]
pub struct DeploykitError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DeploykitError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DeploykitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DeploykitError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for DeploykitError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<deploykit_tools::Error> for DeploykitError {
    fn from(err: deploykit_tools::Error) -> Self {
        let exit_code = match err {
            deploykit_tools::Error::Registry(_) | deploykit_tools::Error::Manifest(_) => {
                ExitCode::from(CONFIG_ERROR)
            }
            _ => ExitCode::FAILURE,
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}

impl From<RegistryError> for DeploykitError {
    fn from(err: RegistryError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::from(CONFIG_ERROR),
        }
    }
}

impl From<ManifestError> for DeploykitError {
    fn from(err: ManifestError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::from(CONFIG_ERROR),
        }
    }
}
