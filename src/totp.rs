use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::time::SystemTime;
use subtle::{Choice, ConstantTimeEq};

use crate::error::OtpError;
use crate::secret::decode_secret;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238
// HOTP https://datatracker.ietf.org/doc/html/rfc4226

// time-based moving factor over 30 second steps
// codes are 6 decimal digits, leading zeros restored at display time
// verification accepts a symmetric window of steps to absorb clock drift

type HmacSha1 = Hmac<Sha1>;

const TIME_STEP: u64 = 30;

pub const DEFAULT_WINDOW: i64 = 3;
const MIN_WINDOW: i64 = 1;
const MAX_WINDOW: i64 = 10;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

// Current moving factor: whole 30 second periods since the Unix epoch.
// A clock set before the epoch counts as period zero.
pub fn moving_factor(clock: &impl GetTime) -> u64 {
    let time = clock.get_now().duration_since(SystemTime::UNIX_EPOCH);
    let secs = time.unwrap_or_default().as_secs();
    secs / TIME_STEP
}

#[derive(Debug)]
pub struct Totp {
    secret: Vec<u8>,
    encoded_secret: String,
    window: i64,
}

impl Totp {
    // The encoded secret is decoded once here; decode failures propagate.
    pub fn new(window: i64, encoded_secret: &str) -> Result<Self, OtpError> {
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
            return Err(OtpError::IllegalWindowSize(window));
        }

        let secret = decode_secret(encoded_secret)?;

        Ok(Totp {
            secret,
            encoded_secret: String::from(encoded_secret),
            window,
        })
    }

    pub fn with_default_window(encoded_secret: &str) -> Result<Self, OtpError> {
        Totp::new(DEFAULT_WINDOW, encoded_secret)
    }

    // HOTP value for the counter at time_step + offset. The counter is
    // serialized as 8 bytes big-endian per RFC 4226; a negative offset at
    // step zero wraps to the same two's-complement byte pattern a signed
    // counter would produce.
    pub fn compute_code(&self, time_step: u64, offset: i64) -> Result<u32, OtpError> {
        let counter = time_step.wrapping_add_signed(offset);
        let hmac = self.make_hmac(&counter.to_be_bytes())?;
        Ok(truncate(&hmac))
    }

    pub fn verify_code(&self, candidate: u32) -> Result<bool, OtpError> {
        self.verify_code_at(candidate, &Clock::new())
    }

    // Checks the candidate against every step in -window..=window around
    // the clock's current step. Comparisons are constant-time and every
    // offset is evaluated, so timing does not reveal which offset matched.
    pub fn verify_code_at(&self, candidate: u32, clock: &impl GetTime) -> Result<bool, OtpError> {
        let current_step = moving_factor(clock);

        let mut matched = Choice::from(0u8);
        for offset in -self.window..=self.window {
            let code = self.compute_code(current_step, offset)?;
            matched |= code.ct_eq(&candidate);
        }

        Ok(matched.into())
    }

    // QR code URL for provisioning an authenticator app. The colon is the
    // label delimiter in the otpauth scheme, so neither field may contain
    // one; all whitespace is stripped from both.
    pub fn provisioning_url(&self, issuer: &str, user: &str) -> Result<String, OtpError> {
        if issuer.contains(':') || user.contains(':') {
            return Err(OtpError::IllegalLabel);
        }

        let issuer: String = issuer.split_whitespace().collect();
        let user: String = user.split_whitespace().collect();

        Ok(format!(
            "https://chart.googleapis.com/chart?chs=200x200&chld=M%7C0&cht=qr&chl=otpauth://totp/{}:{}%3Fsecret={}",
            issuer, user, self.encoded_secret
        ))
    }

    // HMAC_SHA-1 -> 20 byte string
    fn make_hmac(&self, data: &[u8]) -> Result<Vec<u8>, OtpError> {
        let mut mac = HmacSha1::new_from_slice(&self.secret).map_err(|_| OtpError::CryptoBackend)?;
        mac.update(data);
        let result = mac.finalize();

        Ok(result.into_bytes().to_vec())
    }
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: &[u8]) -> u32 {
    let base_code = dynamic_truncation(hmac);

    base_code % u32::pow(10, 6)
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(hmac: &[u8]) -> u32 {
    let offset = (hmac[19] & 0xf) as usize;
    let code = (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff);
    code
}
