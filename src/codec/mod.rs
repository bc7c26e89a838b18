//! Seller-id codec
//!
//! Derives a short, URL-safe public seller identifier from an internal
//! network code, and reverses the transform. The encoding is unpadded
//! URL-safe base64 (`+/` replaced by `-_`, trailing `=` stripped), which
//! keeps the output to letters and digits for the numeric network codes
//! ad servers hand out. The substitution must stay in lockstep with the
//! encoder shipped to the admin screen, so ids produced on either side
//! decode on the other.

use base64::{Engine as _, engine::general_purpose};
use thiserror::Error;

/// Error type for decode operations
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input does not correspond to any valid encoding
    #[error("Invalid encoded id: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    /// Input decoded, but not to a UTF-8 string
    #[error("Decoded id is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode a network code into a public seller id.
///
/// Deterministic and total over any input string. The output never
/// contains `=` padding.
///
/// # Example
///
/// ```rust
/// use sellers_json_sdk::codec;
///
/// let id = codec::encode("12345");
/// assert!(!id.contains('='));
/// assert_eq!(codec::decode(&id).unwrap(), "12345");
/// ```
pub fn encode(input: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(input.as_bytes())
}

/// Decode a public seller id back into the original network code.
///
/// Padding is restored internally, so ids produced by [`encode`] (or by
/// the paired admin-screen encoder) decode as-is. Malformed input yields
/// a [`CodecError`], never a panic; callers should treat a failed decode
/// as unrecoverable input.
pub fn decode(code: &str) -> Result<String, CodecError> {
    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(code.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for input in ["12345", "0", "network-code-99", "", "日本語", "a"] {
            let encoded = encode(input);
            assert_eq!(decode(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_no_padding_in_output() {
        // Lengths 1..=8 cover every padding case.
        for len in 1..=8 {
            let input = "7".repeat(len);
            assert!(!encode(&input).contains('='));
        }
    }

    #[test]
    fn test_numeric_codes_stay_alphanumeric() {
        let encoded = encode("1234567890");
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert!(decode("not base64!!").is_err());
        assert!(decode("abc=").is_err());
    }

    #[test]
    fn test_decode_known_value() {
        // "12345" encoded with the URL-safe alphabet.
        assert_eq!(decode("MTIzNDU").unwrap(), "12345");
    }
}
