// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect configuration.
//!
//! A [`Config`] is built once, before any engine starts, and never changes
//! afterwards. Hosts hand over loosely-typed options as `(key, value)` pairs;
//! each recognized key is accepted only when its value has the declared kind,
//! otherwise the built-in default stays in place. Nothing here fails.

use log::trace;

/// Fixed period of the document-height poll, in milliseconds.
pub const DOCUMENT_POLL_INTERVAL_MS: i32 = 300;

/// Option key enabling the parallax engine (boolean).
pub const KEY_PARALLAX: &str = "parallax";
/// Option key for the parallax minimum viewport width (number).
pub const KEY_PARALLAX_MIN_WIDTH: &str = "parallaxMinWidth";
/// Option key enabling the reveal engine (boolean).
pub const KEY_REVEAL: &str = "scrollToReveal";
/// Option key for the reveal minimum viewport width (number).
pub const KEY_REVEAL_MIN_WIDTH: &str = "scrollToRevealMinWidth";
/// Option key for the reveal threshold above the viewport bottom (number).
pub const KEY_REVEAL_OFFSET: &str = "scrollToRevealOffset";
/// Option key for the trigger recalculation period (number).
pub const KEY_RECALC_INTERVAL: &str = "autoUpdateInterval";

/// Every key [`Config::apply`] recognizes.
pub const OPTION_KEYS: [&str; 6] = [
    KEY_PARALLAX,
    KEY_PARALLAX_MIN_WIDTH,
    KEY_REVEAL,
    KEY_REVEAL_MIN_WIDTH,
    KEY_REVEAL_OFFSET,
    KEY_RECALC_INTERVAL,
];

/// A loosely-typed option value as supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptionValue {
    /// A boolean.
    Bool(bool),
    /// Any number, including `NaN` and infinities.
    Number(f64),
    /// Anything else (strings, objects, `null`, ...).
    Other,
}

/// Settings for both effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Whether the parallax engine runs.
    pub parallax: bool,
    /// Viewport width below which parallax is disabled, in CSS pixels.
    pub parallax_min_width: f64,
    /// Whether the reveal engine runs.
    pub reveal: bool,
    /// Viewport width below which reveal is disabled, in CSS pixels.
    pub reveal_min_width: f64,
    /// Distance above the viewport bottom at which elements reveal, in pixels.
    pub reveal_offset: f64,
    /// Period of the trigger recalculation loop, in milliseconds.
    pub recalc_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config {
    /// The built-in defaults.
    pub const DEFAULT: Self = Self {
        parallax: true,
        parallax_min_width: 800.0,
        reveal: true,
        reveal_min_width: 800.0,
        reveal_offset: 140.0,
        recalc_interval_ms: 1500.0,
    };

    /// Builds a configuration from the defaults plus every applicable option.
    #[must_use]
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut config = Self::DEFAULT;
        for (key, value) in options {
            config.apply(key, value);
        }
        config
    }

    /// Applies a single option.
    ///
    /// Returns `true` if the option was recognized and had the right kind.
    /// Unknown keys and mistyped values leave the configuration untouched.
    pub fn apply(&mut self, key: &str, value: OptionValue) -> bool {
        let accepted = match (key, value) {
            (KEY_PARALLAX, OptionValue::Bool(v)) => {
                self.parallax = v;
                true
            }
            (KEY_PARALLAX_MIN_WIDTH, OptionValue::Number(v)) => {
                self.parallax_min_width = v;
                true
            }
            (KEY_REVEAL, OptionValue::Bool(v)) => {
                self.reveal = v;
                true
            }
            (KEY_REVEAL_MIN_WIDTH, OptionValue::Number(v)) => {
                self.reveal_min_width = v;
                true
            }
            (KEY_REVEAL_OFFSET, OptionValue::Number(v)) => {
                self.reveal_offset = v;
                true
            }
            (KEY_RECALC_INTERVAL, OptionValue::Number(v)) => {
                self.recalc_interval_ms = v;
                true
            }
            _ => false,
        };
        if !accepted {
            trace!("ignoring option {key:?} = {value:?}");
        }
        accepted
    }

    /// Recalculation period as a host timer timeout.
    #[must_use]
    pub fn recalc_timeout_ms(&self) -> i32 {
        timer_timeout_ms(self.recalc_interval_ms)
    }
}

/// Converts a millisecond period into a host timer timeout.
///
/// Follows the conversion a browser applies to a `setInterval` delay:
/// non-finite values become 0, fractions are truncated toward zero, the result
/// wraps modulo 2^32 into the signed 32-bit range, and negatives become 0.
/// So `3e9` wraps negative and ends up as 0, not as `i32::MAX`.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the i64 cast drops only the fraction; the i32 cast wraps as ToInt32 does"
)]
pub fn timer_timeout_ms(ms: f64) -> i32 {
    const TWO_POW_32: f64 = 4_294_967_296.0;
    if !ms.is_finite() {
        return 0;
    }
    // |rem| < 2^32, so the i64 cast only truncates the fraction.
    let rem = (ms % TWO_POW_32) as i64;
    (rem as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_options_keep_defaults() {
        let config = Config::from_options(core::iter::empty());
        assert_eq!(config, Config::DEFAULT, "no options means defaults");
        assert!(config.parallax && config.reveal, "both effects on by default");
        assert_eq!(config.reveal_offset, 140.0, "default reveal offset");
        assert_eq!(config.recalc_interval_ms, 1500.0, "default recalc period");
    }

    #[test]
    fn correctly_typed_options_override_exactly() {
        let config = Config::from_options([
            (KEY_PARALLAX, OptionValue::Bool(false)),
            (KEY_PARALLAX_MIN_WIDTH, OptionValue::Number(1024.0)),
            (KEY_REVEAL, OptionValue::Bool(false)),
            (KEY_REVEAL_MIN_WIDTH, OptionValue::Number(640.0)),
            (KEY_REVEAL_OFFSET, OptionValue::Number(-20.5)),
            (KEY_RECALC_INTERVAL, OptionValue::Number(250.0)),
        ]);
        assert_eq!(
            config,
            Config {
                parallax: false,
                parallax_min_width: 1024.0,
                reveal: false,
                reveal_min_width: 640.0,
                reveal_offset: -20.5,
                recalc_interval_ms: 250.0,
            },
            "every recognized key overrides its field"
        );
    }

    #[test]
    fn mistyped_and_unknown_options_are_ignored() {
        let config = Config::from_options([
            (KEY_PARALLAX, OptionValue::Number(0.0)),
            (KEY_PARALLAX_MIN_WIDTH, OptionValue::Bool(true)),
            (KEY_REVEAL, OptionValue::Other),
            (KEY_REVEAL_OFFSET, OptionValue::Other),
            ("scrollToRevealOfset", OptionValue::Number(3.0)),
        ]);
        assert_eq!(config, Config::DEFAULT, "nothing should have applied");
    }

    #[test]
    fn apply_reports_acceptance() {
        let mut config = Config::DEFAULT;
        assert!(config.apply(KEY_REVEAL, OptionValue::Bool(false)), "bool accepted");
        assert!(!config.apply(KEY_REVEAL, OptionValue::Number(1.0)), "number rejected");
        assert!(!config.reveal, "rejected value must not reset the earlier one");
    }

    #[test]
    fn nan_counts_as_a_number() {
        let config = Config::from_options([(KEY_RECALC_INTERVAL, OptionValue::Number(f64::NAN))]);
        assert!(config.recalc_interval_ms.is_nan(), "NaN is still a number");
        assert_eq!(config.recalc_timeout_ms(), 0, "NaN period clamps to 0");
    }

    #[test]
    fn timer_timeouts_clamp() {
        assert_eq!(timer_timeout_ms(1500.0), 1500, "plain value");
        assert_eq!(timer_timeout_ms(12.9), 12, "fraction truncated");
        assert_eq!(timer_timeout_ms(-5.0), 0, "negative clamps");
        assert_eq!(timer_timeout_ms(-0.5), 0, "small negative truncates to 0");
        assert_eq!(timer_timeout_ms(i32::MAX.into()), i32::MAX, "largest delay kept");
    }

    #[test]
    fn timer_timeouts_wrap_like_int32() {
        assert_eq!(timer_timeout_ms(f64::INFINITY), 0, "positive infinity");
        assert_eq!(timer_timeout_ms(f64::NEG_INFINITY), 0, "negative infinity");
        assert_eq!(timer_timeout_ms(3e9), 0, "wraps negative, then clamps");
        assert_eq!(timer_timeout_ms(4_294_967_396.0), 100, "wraps past 2^32");
        assert_eq!(timer_timeout_ms(2_147_483_648.0), 0, "2^31 wraps to i32::MIN");
        assert_eq!(timer_timeout_ms(-4_294_967_000.0), 296, "negative wraps positive");
    }
}
