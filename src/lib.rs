//! One-time password generation and validation per RFC 4226 (HOTP) and
//! RFC 6238 (TOTP), including secret generation and `otpauth://`
//! provisioning urls.
//!
//! All operations are pure functions of their inputs, counters and clocks
//! are owned by the caller.

#[macro_use]
mod macros;

pub mod error;
pub mod hotp;
pub mod otpauth;
pub mod secret;
pub mod totp;
pub mod validate;


pub use self::error::*;
pub use self::hotp::{dynamic_truncation, HOTPGenerator, DEFAULT_DIGITS};
pub use self::otpauth::{OTPAuthUrl, OTPType};
pub use self::secret::{OTPSecret, RECOMMENDED_SECRET_BITS};
pub use self::totp::{TOTPGenerator, DEFAULT_PERIOD};
pub use self::validate::{validate_hotp, validate_totp, DEFAULT_LOOK_AHEAD};
