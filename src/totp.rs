use crate::error::{OTPError, OTPResult};
use crate::hotp::HOTPGenerator;

pub const DEFAULT_PERIOD: u32 = 30;

#[derive(Debug, Clone, Copy)]
pub struct TOTPGenerator<'a> {
  pub digits: u8,
  pub period: u32,
  pub secret: &'a [u8],
}

impl<'a> TOTPGenerator<'a> {
  /// Time-based OTP for the given unix timestamp (RFC 6238).
  ///
  /// The timestamp is divided into `period` second steps and the resulting
  /// step counter is fed to the HOTP generation.
  pub fn generate(&self, timestamp: u64) -> OTPResult<String> {
    if self.period == 0 {
      return Err(OTPError::InvalidPeriod);
    }
    let hotp_gen = HOTPGenerator {
      digits: self.digits,
      secret: self.secret,
    };
    hotp_gen.generate(timestamp / u64::from(self.period))
  }

  /// Timestamp at which the code generated for `timestamp` rolls over.
  pub fn valid_until(&self, timestamp: u64) -> OTPResult<u64> {
    if self.period == 0 {
      return Err(OTPError::InvalidPeriod);
    }
    Ok((timestamp / u64::from(self.period) + 1) * u64::from(self.period))
  }
}
