// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient numeric parsing for attribute values.
//!
//! Attribute values are author-written text. These parsers read the longest
//! numeric prefix and ignore whatever trails it (`"250ms"` is 250), the way
//! `parseInt`/`parseFloat` do in page scripts. A value with no numeric prefix
//! is `None`, standing in for `NaN`.

/// Strips leading whitespace, including the byte-order mark.
fn trim_leading(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Splits an optional leading sign; returns `(is_negative, rest)`.
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Parses a leading integer (decimal, or hexadecimal with a `0x` prefix).
///
/// Out-of-range values saturate.
#[must_use]
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, rest) = split_sign(trim_leading(s));
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        any = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !any {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Parses a leading decimal floating-point literal.
///
/// Accepts `Infinity` with an optional sign. An exponent is only consumed
/// when it has digits, so `"2e"` parses as 2.
#[must_use]
pub fn parse_float(s: &str) -> Option<f64> {
    let trimmed = trim_leading(s);
    let (negative, rest) = split_sign(trimmed);
    if rest.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let sign_len = trimmed.len() - rest.len();
    let bytes = rest.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    trimmed[..sign_len + end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_reads_leading_digits() {
        assert_eq!(parse_int("250"), Some(250), "plain");
        assert_eq!(parse_int("  -40ms"), Some(-40), "whitespace, sign, suffix");
        assert_eq!(parse_int("+7"), Some(7), "explicit plus");
        assert_eq!(parse_int("3.9"), Some(3), "stops at the dot");
        assert_eq!(parse_int("0x1F"), Some(31), "hex prefix");
    }

    #[test]
    fn int_without_digits_is_none() {
        assert_eq!(parse_int(""), None, "empty");
        assert_eq!(parse_int("ms250"), None, "leading garbage");
        assert_eq!(parse_int("-"), None, "sign only");
        assert_eq!(parse_int("0x"), None, "bare hex prefix");
    }

    #[test]
    fn int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX), "clamped");
    }

    #[test]
    fn float_reads_leading_literal() {
        assert_eq!(parse_float("0.5"), Some(0.5), "plain");
        assert_eq!(parse_float(" .25x"), Some(0.25), "no integer part");
        assert_eq!(parse_float("-1.5e1px"), Some(-15.0), "exponent");
        assert_eq!(parse_float("2e"), Some(2.0), "dangling exponent ignored");
        assert_eq!(parse_float("3."), Some(3.0), "trailing dot");
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY), "infinity");
    }

    #[test]
    fn float_without_digits_is_none() {
        assert_eq!(parse_float(""), None, "empty");
        assert_eq!(parse_float("fast"), None, "word");
        assert_eq!(parse_float("."), None, "lone dot");
        assert_eq!(parse_float("NaN"), None, "NaN text");
    }
}
