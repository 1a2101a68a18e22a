// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/deploykit/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

pub mod color;

/// Decodes a hex string, tolerating surrounding whitespace and an optional `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

/// Pretty-prints an optional value, falling back to `auto` when the node decides.
pub fn format_or_auto(value: Option<impl std::fmt::Display>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "auto".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_and_without_prefix() {
        assert_eq!(decode0x("0x0aff").unwrap(), vec![0x0a, 0xff]);
        assert_eq!(decode0x(" 0aff\n").unwrap(), vec![0x0a, 0xff]);
        assert!(decode0x("0xzz").is_err());
    }

    #[test]
    fn formats_missing_values_as_auto() {
        assert_eq!(format_or_auto(Some(97u64)), "97");
        assert_eq!(format_or_auto(None::<u64>), "auto");
    }
}
