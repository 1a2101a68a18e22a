// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! Snapshot of the environment variables a registry is loaded from.

use std::{collections::HashMap, fmt, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("failed to read env file: {0}")]
    Dotenv(#[from] dotenv::Error),
}

/// Environment variables captured once, at process start.
///
/// The registry is loaded from this snapshot rather than from process state, so the same
/// snapshot always produces the same registry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Captures the variables of the current process. Non-unicode entries are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Overlays the variables of a `.env` file.
    ///
    /// Variables already present in the snapshot take precedence. A missing file is skipped.
    pub fn with_dotenv(mut self, path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!(@grey, "no env file at {}", path.display());
            return Ok(self);
        }

        let mut loaded = 0;
        for item in dotenv::from_path_iter(path)? {
            let (key, value) = item?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                loaded += 1;
            }
        }
        debug!(@grey, "loaded {} variable(s) from {}", loaded, path.display());
        Ok(self)
    }

    /// Returns a copy of this snapshot with `key` set to `value`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this snapshot without `key`.
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

// Values may hold private keys.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut keys: Vec<_> = self.vars.keys().collect();
        keys.sort();
        f.debug_struct("Environment").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn dotenv_fills_missing_variables_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PRIVATEKEY=0xfromfile\nRPC_TOKEN=abc\n").unwrap();

        let env = Environment::default()
            .with_var("PRIVATEKEY", "0xfromprocess")
            .with_dotenv(&path)
            .unwrap();
        assert_eq!(env.get("PRIVATEKEY"), Some("0xfromprocess"));
        assert_eq!(env.get("RPC_TOKEN"), Some("abc"));
    }

    #[test]
    fn missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::default()
            .with_var("A", "1")
            .with_dotenv(dir.path().join(".env"))
            .unwrap();
        assert_eq!(env, Environment::from_iter([("A", "1")]));
    }

    #[test]
    fn debug_hides_values() {
        let env = Environment::default().with_var("PRIVATEKEY", "0xsecret");
        let printed = format!("{env:?}");
        assert!(printed.contains("PRIVATEKEY"));
        assert!(!printed.contains("0xsecret"));
    }

    #[test]
    fn without_var_removes_entry() {
        let env = Environment::default()
            .with_var("PRIVATEKEY", "0x01")
            .without_var("PRIVATEKEY");
        assert_eq!(env.get("PRIVATEKEY"), None);
    }
}
