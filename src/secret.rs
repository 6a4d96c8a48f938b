use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::OtpError;

// 160-bit shared secrets, as recommended by RFC 4226
pub const SECRET_SIZE: usize = 20;

// Generate a random secret as an unpadded base32 string
pub fn generate_secret() -> Result<String, OtpError> {
    let mut dest = [0u8; SECRET_SIZE];
    OsRng
        .try_fill_bytes(&mut dest)
        .map_err(|_| OtpError::EntropySourceUnavailable)?;
    Ok(BASE32_NOPAD.encode(&dest))
}

// Decode a base32 secret into raw key bytes. Accepts lowercase and padded
// input per RFC 4648; key length is not checked here since HMAC takes any
// non-empty key.
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, OtpError> {
    let normalized = encoded.trim_end_matches('=').to_uppercase();
    BASE32_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|_| OtpError::InvalidEncoding)
}

// Validate key provided in arguments is a valid base32 encoding
pub fn is_base32_key(value: &str) -> Result<(), String> {
    match decode_secret(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the key is not a valid base32 encoding")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::RFC_SECRET;

    #[test]
    fn generated_secret_round_trips() {
        let encoded = generate_secret().unwrap();
        let raw = decode_secret(&encoded).unwrap();

        assert_eq!(raw.len(), SECRET_SIZE);
        assert_eq!(BASE32_NOPAD.encode(&raw), encoded);
    }

    #[test]
    fn decodes_known_encoding() {
        let raw = decode_secret(RFC_SECRET).unwrap();
        assert_eq!(raw, b"12345678901234567890");
    }

    #[test]
    fn decoding_is_case_insensitive() {
        let upper = decode_secret(RFC_SECRET).unwrap();
        let lower = decode_secret(&RFC_SECRET.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn decoding_accepts_padded_input() {
        let unpadded = decode_secret("MFRGGZDFMY").unwrap();
        let padded = decode_secret("MFRGGZDFMY======").unwrap();
        assert_eq!(unpadded, padded);
        assert_eq!(padded, b"abcdef");
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(decode_secret("invalid-key!"), Err(OtpError::InvalidEncoding));
        assert_eq!(decode_secret("MFRGG1"), Err(OtpError::InvalidEncoding));
    }

    #[test]
    fn key_validator_matches_decoder() {
        assert!(is_base32_key(RFC_SECRET).is_ok());
        assert!(is_base32_key("invalid-key!").is_err());
    }
}
