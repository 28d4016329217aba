use constant_time_eq::constant_time_eq;

use crate::error::OTPResult;
use crate::hotp::HOTPGenerator;
use crate::totp::TOTPGenerator;

pub const DEFAULT_LOOK_AHEAD: u64 = 3;

/// Check a candidate against the counters `counter .. counter + look_ahead`.
///
/// The window only moves forward, a code generated for a counter before
/// `counter` is never accepted again. On a match the caller must advance its
/// stored counter past the matched value, otherwise the same code stays
/// valid for further attempts.
pub fn validate_hotp(
  candidate: &str,
  secret: &[u8],
  counter: u64,
  digits: u8,
  look_ahead: u64,
) -> OTPResult<bool> {
  let hotp_gen = HOTPGenerator { digits, secret };

  for offset in 0..look_ahead {
    let checked_counter = match counter.checked_add(offset) {
      Some(checked_counter) => checked_counter,
      None => break,
    };
    let expected = hotp_gen.generate(checked_counter)?;

    if constant_time_eq(candidate.as_bytes(), expected.as_bytes()) {
      return Ok(true);
    }
  }

  Ok(false)
}

/// Check a candidate against the time steps for `timestamp` and one step
/// before and after it, tolerating clock skew in either direction.
pub fn validate_totp(
  candidate: &str,
  secret: &[u8],
  timestamp: u64,
  digits: u8,
  period: u32,
) -> OTPResult<bool> {
  let totp_gen = TOTPGenerator { digits, period, secret };
  let step = u64::from(period);
  let window = [timestamp.checked_sub(step), Some(timestamp), timestamp.checked_add(step)];

  for shifted in window.into_iter().flatten() {
    let expected = totp_gen.generate(shifted)?;

    if constant_time_eq(candidate.as_bytes(), expected.as_bytes()) {
      return Ok(true);
    }
  }

  Ok(false)
}
