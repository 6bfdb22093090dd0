//! Decimal precision clamping.
//!
//! The device accepts at most [`DECIMAL_PRECISION`] fractional digits.
//! Rounding works on the decimal text itself, half away from zero, so that
//! halfway values like `0.00005` round the same way on every platform.

use std::borrow::Cow;

use crate::log::debug;

/// Maximum number of fractional digits the device understands.
pub const DECIMAL_PRECISION: usize = 4;

/// Largest magnitude at which every `f64` is still an exact integer (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Clamp a numeric attribute value or path number to [`DECIMAL_PRECISION`].
///
/// Values without a `.` are returned untouched. Otherwise the number at the
/// start of the value is rounded and whatever follows it (`px`, `mm`, `%`)
/// is put back unchanged. Values that do not start with a number are
/// returned untouched.
pub fn limit_decimals(value: &str) -> Cow<'_, str> {
    if !value.contains('.') {
        return Cow::Borrowed(value);
    }

    let text = value.trim();
    let (number, unit) = text.split_at(numeric_prefix_len(text));

    match round_number(number, DECIMAL_PRECISION) {
        Some(mut rounded) => {
            rounded.push_str(unit);
            Cow::Owned(rounded)
        }
        None => {
            debug!(value, "no leading number, left unchanged");
            Cow::Borrowed(value)
        }
    }
}

/// Byte length of the number literal at the start of `text`.
///
/// An `e` only counts as an exponent when digits follow it, so `1.5em`
/// splits into `1.5` and `em`.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    end = skip_digits(end);
    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = skip_digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    end
}

/// Round a plain decimal or exponent literal to `places` fractional digits.
fn round_number(text: &str, places: usize) -> Option<String> {
    if let Some(decimal) = Decimal::parse(text) {
        return Some(decimal.round(places).to_string());
    }
    if text.contains(['e', 'E']) {
        return round_float(text, places);
    }
    None
}

/// Exponent literals go through `f64`; the digits are too scattered to round
/// textually.
///
/// Past [`EXACT_INTEGER_LIMIT`] the scaled value has no fractional part left
/// to round (and may overflow), so the value is written out as it is.
fn round_float(text: &str, places: usize) -> Option<String> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    let rounded = if scaled.abs() < EXACT_INTEGER_LIMIT {
        scaled.round() / scale
    } else {
        value
    };
    let mut out = format!("{rounded}");
    if !out.contains('.') {
        out.push_str(".0");
    }
    Some(out)
}

/// A decimal literal split into its sign and digit runs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    negative: bool,
    int_digits: Vec<u8>,
    frac_digits: Vec<u8>,
}

impl Decimal {
    fn parse(text: &str) -> Option<Self> {
        let (negative, rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if int.is_empty() && frac.is_empty() {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int) || !all_digits(frac) {
            return None;
        }
        Some(Decimal {
            negative,
            int_digits: int.bytes().map(|b| b - b'0').collect(),
            frac_digits: frac.bytes().map(|b| b - b'0').collect(),
        })
    }

    /// Round half away from zero. The sign is untouched, so rounding works
    /// on the magnitude only.
    fn round(mut self, places: usize) -> Self {
        if self.frac_digits.len() <= places {
            return self;
        }
        let round_up = self.frac_digits[places] >= 5;
        self.frac_digits.truncate(places);
        if !round_up {
            return self;
        }

        let mut carry = true;
        for digit in self
            .frac_digits
            .iter_mut()
            .rev()
            .chain(self.int_digits.iter_mut().rev())
        {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            self.int_digits.insert(0, 1);
        }
        self
    }
}

impl std::fmt::Display for Decimal {
    /// Shortest float-like form: no leading zeros, no trailing zeros, but
    /// always at least one digit on each side of the point.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        let first_int = self
            .int_digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(self.int_digits.len());
        let int = &self.int_digits[first_int..];
        if int.is_empty() {
            f.write_str("0")?;
        }
        for d in int {
            write!(f, "{d}")?;
        }

        f.write_str(".")?;
        let frac_len = self
            .frac_digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);
        let frac = &self.frac_digits[..frac_len];
        if frac.is_empty() {
            f.write_str("0")?;
        }
        for d in frac {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
