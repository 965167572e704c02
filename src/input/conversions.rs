//! Conversions from raw form strings to typed values

use crate::config::InputPolicy;
use crate::error::{Result, ScreeningError};
use crate::models::WardId;

/// Parse a numeric reading
///
/// Under `InputPolicy::Strict` the whole trimmed value must be a finite
/// number, anything else is an `InvalidMeasurement` error. Under
/// `InputPolicy::Permissive` the longest leading decimal number is used, so
/// `"11.2cm"` reads as 11.2 and `"12,5"` as 12; a value with no leading
/// number becomes NaN.
pub fn parse_number(field: &'static str, raw: &str, policy: InputPolicy) -> Result<f64> {
    match policy {
        InputPolicy::Strict => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ScreeningError::InvalidMeasurement {
                field,
                value: raw.to_string(),
            }),
        },
        InputPolicy::Permissive => match leading_number(raw) {
            Some(value) => Ok(value),
            None => {
                log::warn!("Treating {field}={raw:?} as missing");
                Ok(f64::NAN)
            }
        },
    }
}

/// Longest finite decimal number at the start of `raw`, after leading whitespace
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a yes/no answer
///
/// `InputPolicy::Strict` accepts yes/no in any case and rejects anything
/// else. `InputPolicy::Permissive` only recognises the exact lowercase
/// answers and returns `None` for any other value.
pub fn parse_flag(field: &'static str, raw: &str, policy: InputPolicy) -> Result<Option<bool>> {
    let answer = match policy {
        InputPolicy::Strict => raw.trim().to_ascii_lowercase(),
        InputPolicy::Permissive => raw.to_string(),
    };
    match answer.as_str() {
        "yes" => Ok(Some(true)),
        "no" => Ok(Some(false)),
        _ => match policy {
            InputPolicy::Strict => Err(ScreeningError::InvalidFlag {
                field,
                value: raw.to_string(),
            }),
            InputPolicy::Permissive => {
                log::warn!("Treating {field}={raw:?} as unanswered");
                Ok(None)
            }
        },
    }
}

/// Parse a ward number; required under every policy
pub fn parse_ward(raw: &str) -> Result<WardId> {
    raw.trim()
        .parse::<WardId>()
        .map_err(|_| ScreeningError::InvalidWard(raw.to_string()))
}
