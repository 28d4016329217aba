use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum OTPError {
  InvalidDigits(u8),
  InvalidPeriod,
  InvalidSecretSize(usize),
  InvalidDigestLength(usize),
  EntropySource(String),
  InvalidSecret,
  InvalidUrl(String),
  InvalidScheme,
  InvalidType,
  MissingParameter(String),
}

impl fmt::Display for OTPError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OTPError::InvalidDigits(digits) => write!(f, "Invalid number of digits: {}. Supported range is 1 to 9", digits)?,
      OTPError::InvalidPeriod => write!(f, "Time step must be greater than zero")?,
      OTPError::InvalidSecretSize(bits) => write!(f, "Invalid secret size: {} bits", bits)?,
      OTPError::InvalidDigestLength(len) => write!(f, "Invalid HMAC-SHA1 digest length: {}. Expected 20 bytes", len)?,
      OTPError::EntropySource(error) => write!(f, "Secure random source unavailable: {}", error)?,
      OTPError::InvalidSecret => write!(f, "Invalid base32 encoded secret")?,
      OTPError::InvalidUrl(error) => write!(f, "Invalid url: {}", error)?,
      OTPError::InvalidScheme => write!(f, "Invalid url scheme. Expected otpauth")?,
      OTPError::InvalidType => write!(f, "Invalid OTP type. Only totp and hotp are supported")?,
      OTPError::MissingParameter(name) => write!(f, "Missing required parameter: {}", name)?,
    }

    Ok(())
  }
}

impl std::error::Error for OTPError {}

pub type OTPResult<T> = Result<T, OTPError>;

error_convert_from!(url::ParseError, OTPError, InvalidUrl(display));
