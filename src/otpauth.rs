use std::fmt;
use std::str::FromStr;

use url::{form_urlencoded, Url};

use crate::error::{OTPError, OTPResult};
use crate::hotp::{HOTPGenerator, DEFAULT_DIGITS};
use crate::secret::OTPSecret;
use crate::totp::{TOTPGenerator, DEFAULT_PERIOD};

const OTP_URL_SCHEME: &str = "otpauth";

/// The two provisionable OTP flavors. Anything else in an `otpauth` url is
/// rejected at parse time.
#[derive(Debug)]
pub enum OTPType {
  Totp { period: u32 },
  Hotp { counter: u64 },
}

impl fmt::Display for OTPType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OTPType::Totp { .. } => write!(f, "totp")?,
      OTPType::Hotp { .. } => write!(f, "hotp")?,
    }
    Ok(())
  }
}

#[derive(Debug)]
pub struct OTPAuthUrl {
  pub otp_type: OTPType,
  pub digits: u8,
  pub account_name: String,
  pub issuer: Option<String>,
  pub secret: OTPSecret,
}

impl OTPAuthUrl {
  pub fn parse<S: AsRef<str>>(url_str: S) -> OTPResult<OTPAuthUrl> {
    let url = Url::parse(url_str.as_ref())?;
    if url.scheme() != OTP_URL_SCHEME {
      return Err(OTPError::InvalidScheme);
    }
    let otp_type = match url.host_str() {
      Some("totp") => {
        let period = Self::find_parameter(&url, "period")?.unwrap_or(DEFAULT_PERIOD);
        OTPType::Totp { period }
      }
      Some("hotp") => {
        let counter = Self::find_required_parameter(&url, "counter")?;
        OTPType::Hotp { counter }
      }
      _ => return Err(OTPError::InvalidType),
    };
    let mut issuer = Self::find_parameter::<String>(&url, "issuer")?;
    let mut account_name = String::new();
    if !url.path().is_empty() {
      let mut parts = url.path()[1..].split(':');
      if let Some(issuer_or_account) = parts.next() {
        account_name = issuer_or_account.to_string();
      }
      if let Some(account) = parts.next() {
        issuer = Some(account_name);
        account_name = account.to_string();
      }
    }
    if account_name.is_empty() {
      return Err(OTPError::MissingParameter("accountname".to_string()));
    }
    let digits = Self::find_parameter(&url, "digits")?.unwrap_or(DEFAULT_DIGITS);
    let secret = Self::find_required_parameter(&url, "secret")?;

    Ok(OTPAuthUrl {
      otp_type,
      digits,
      account_name,
      issuer,
      secret,
    })
  }

  pub fn to_url(&self) -> String {
    let mut result = format!("{}://{}/", OTP_URL_SCHEME, self.otp_type);

    if let Some(issuer) = &self.issuer {
      result.extend(form_urlencoded::byte_serialize(issuer.as_bytes()));
      result += ":"
    }
    result.extend(form_urlencoded::byte_serialize(self.account_name.as_bytes()));
    result += "?secret=";
    result += &self.secret.to_string();
    match self.otp_type {
      OTPType::Totp { period } if period != DEFAULT_PERIOD => result += &format!("&period={}", period),
      OTPType::Totp { .. } => (),
      OTPType::Hotp { counter } => result += &format!("&counter={}", counter),
    }
    if self.digits != DEFAULT_DIGITS {
      result += &format!("&digits={}", self.digits);
    }
    if let Some(issuer) = &self.issuer {
      result += "&issuer=";
      result.extend(form_urlencoded::byte_serialize(issuer.as_bytes()));
    }

    result
  }

  /// Generate a code for this provisioning entry. For a totp url the
  /// parameter is a unix timestamp, for a hotp url a counter value.
  pub fn generate(&self, timestamp_or_counter: u64) -> OTPResult<String> {
    match self.otp_type {
      OTPType::Totp { period } => TOTPGenerator {
        digits: self.digits,
        period,
        secret: self.secret.as_bytes(),
      }
      .generate(timestamp_or_counter),
      OTPType::Hotp { .. } => HOTPGenerator {
        digits: self.digits,
        secret: self.secret.as_bytes(),
      }
      .generate(timestamp_or_counter),
    }
  }

  fn find_parameter<T: FromStr>(url: &Url, name: &str) -> OTPResult<Option<T>> {
    match url.query_pairs().find(|(key, _)| key == name) {
      Some((_, value)) => {
        let t = value
          .parse::<T>()
          .map_err(|_| OTPError::MissingParameter(name.to_string()))?;
        Ok(Some(t))
      }
      None => Ok(None),
    }
  }

  fn find_required_parameter<T: FromStr>(url: &Url, name: &str) -> OTPResult<T> {
    Self::find_parameter(url, name)?.ok_or_else(|| OTPError::MissingParameter(name.to_string()))
  }
}
