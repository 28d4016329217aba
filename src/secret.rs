use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{OTPError, OTPResult};

pub const RECOMMENDED_SECRET_BITS: usize = 160;

/// Shared secret between OTP generator and validator.
///
/// The underlying bytes are wiped from memory on drop and are never exposed
/// via `Debug`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct OTPSecret(Vec<u8>);

impl OTPSecret {
  /// Draw a fresh secret of `size_in_bits` from the operating system CSPRNG.
  ///
  /// Fails if the secure random source is unavailable. There is no fallback
  /// to a weaker generator.
  pub fn generate(size_in_bits: usize) -> OTPResult<OTPSecret> {
    if size_in_bits == 0 {
      return Err(OTPError::InvalidSecretSize(size_in_bits));
    }
    if size_in_bits < 128 {
      warn!(
        "Generating a {} bit secret, below the 128 bits required by RFC 4226",
        size_in_bits
      );
    }
    let mut bytes = vec![0u8; size_in_bits.div_ceil(8)];

    OsRng
      .try_fill_bytes(&mut bytes)
      .map_err(|error| OTPError::EntropySource(format!("{}", error)))?;

    Ok(OTPSecret(bytes))
  }

  pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> OTPSecret {
    OTPSecret(bytes.as_ref().to_vec())
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl fmt::Debug for OTPSecret {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("OTPSecret").field("len", &self.0.len()).finish_non_exhaustive()
  }
}

impl ToString for OTPSecret {
  fn to_string(&self) -> String {
    data_encoding::BASE32_NOPAD.encode(&self.0)
  }
}

impl FromStr for OTPSecret {
  type Err = OTPError;

  fn from_str(s: &str) -> OTPResult<Self> {
    match data_encoding::BASE32_NOPAD.decode(s.as_bytes()) {
      Ok(bytes) => Ok(OTPSecret(bytes)),
      Err(_) => Err(OTPError::InvalidSecret),
    }
  }
}
