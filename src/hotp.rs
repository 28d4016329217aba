use byteorder::{BigEndian, ByteOrder};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{OTPError, OTPResult};

pub const DEFAULT_DIGITS: u8 = 6;

const MAX_DIGITS: u8 = 9;
const SHA1_DIGEST_BYTES: usize = 20;

type HmacSha1 = Hmac<Sha1>;

/// Extract a 31-bit integer from an HMAC-SHA1 digest (RFC 4226 section 5.3).
///
/// The digest must be exactly 20 bytes, anything else is a programming error
/// of the integration and is rejected.
pub fn dynamic_truncation(digest: &[u8]) -> OTPResult<u32> {
  if digest.len() != SHA1_DIGEST_BYTES {
    return Err(OTPError::InvalidDigestLength(digest.len()));
  }
  let offset = (digest[SHA1_DIGEST_BYTES - 1] & 0xf) as usize;

  Ok(BigEndian::read_u32(&digest[offset..offset + 4]) & 0x7fff_ffff)
}

fn check_digits(digits: u8) -> OTPResult<()> {
  // 10 or more digits would exceed the 31 bits the truncation yields
  if digits == 0 || digits > MAX_DIGITS {
    return Err(OTPError::InvalidDigits(digits));
  }
  Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct HOTPGenerator<'a> {
  pub digits: u8,
  pub secret: &'a [u8],
}

impl<'a> HOTPGenerator<'a> {
  pub fn new(secret: &'a [u8]) -> HOTPGenerator<'a> {
    HOTPGenerator {
      digits: DEFAULT_DIGITS,
      secret,
    }
  }

  /// Counter-based OTP for the given counter value (RFC 4226).
  ///
  /// Deterministic: the same (secret, counter, digits) always produces the
  /// same code, left-zero-padded to exactly `digits` characters.
  pub fn generate(&self, counter: u64) -> OTPResult<String> {
    check_digits(self.digits)?;

    let mut mac = HmacSha1::new_from_slice(self.secret).unwrap();
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let base = dynamic_truncation(&digest)?;

    Ok(format!(
      "{:01$}",
      base % (10_u32).pow(u32::from(self.digits)),
      self.digits as usize
    ))
  }
}
