use once_cell::sync::Lazy;
use regex::Regex;

use super::ConvertError;

/// A number, optional spaces, then a unit made of letters. A leading minus is
/// captured so that negative numbers are reported as bad numbers rather than
/// bad formats, any other sign is a bad format.
static SIZE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?[0-9.]+)\s*([A-Za-z]+)$").expect("invalid size regex"));

/// A human-readable size split into its value and upper-cased unit token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSize {
    pub value: f64,
    pub unit: String,
}

pub fn parse_size(text: &str) -> Result<ParsedSize, ConvertError> {
    let text = text.trim();
    let caps = match SIZE_REGEX.captures(text) {
        Some(caps) => caps,
        None => return Err(ConvertError::InvalidFormat(text.to_string())),
    };

    let number = &caps[1];
    let value: f64 = number
        .parse()
        .map_err(|_| ConvertError::InvalidNumber(number.to_string()))?;
    if value.is_sign_negative() {
        return Err(ConvertError::InvalidNumber(number.to_string()));
    }

    Ok(ParsedSize {
        value,
        unit: caps[2].to_ascii_uppercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        let cases = [
            ("1.5 GB", 1.5, "GB"),
            ("1024B", 1024.0, "B"),
            ("2.5MiB", 2.5, "MIB"),
            ("  7   kib \n", 7.0, "KIB"),
            ("1kb", 1.0, "KB"),
            (".5 KB", 0.5, "KB"),
        ];

        for (text, value, unit) in cases {
            let parsed = parse_size(text).unwrap();
            assert_eq!(parsed.value, value, "text {text:?}");
            assert_eq!(parsed.unit, unit, "text {text:?}");
        }
    }

    #[test]
    fn test_parse_invalid_format() {
        let cases = [
            "abc", "", "1024", "KB", "1 K B", "1.5 GB!", "1,5 GB", "1 2 KB", "+3 TB", "--1 KB",
        ];
        for text in cases {
            let err = parse_size(text).unwrap_err();
            assert!(
                matches!(err, ConvertError::InvalidFormat(_)),
                "text {text:?}, err {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_number() {
        for text in ["-1 KB", "1.2.3 MB", ". B", "-0.5KiB", "-0 KB"] {
            let err = parse_size(text).unwrap_err();
            assert!(
                matches!(err, ConvertError::InvalidNumber(_)),
                "text {text:?}, err {err:?}"
            );
        }
    }
}
