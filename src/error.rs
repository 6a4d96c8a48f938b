use thiserror::Error;

// All failures are surfaced to the caller as typed variants. None of them
// are transient, so nothing here is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    #[error("window size provided not allowed: {0}")]
    IllegalWindowSize(i64),

    #[error("the key is not a valid base32 encoding")]
    InvalidEncoding,

    #[error("issuer or account name contains an illegal character")]
    IllegalLabel,

    #[error("system entropy source is unavailable")]
    EntropySourceUnavailable,

    #[error("failed to initialize HMAC-SHA1 with the shared secret")]
    CryptoBackend,
}
