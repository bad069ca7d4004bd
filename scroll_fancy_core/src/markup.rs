// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute, class and style names shared with page authors.
//!
//! Page markup opts elements in through `data-*` attributes; the engines
//! answer by toggling classes and writing inline styles that the author's
//! stylesheet picks up.

use alloc::format;
use alloc::string::String;

/// Marks an element for reveal; the value is the class added on reveal.
pub const ATTR_REVEAL: &str = "data-reveal";
/// Optional per-element reveal delay in milliseconds.
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
/// Marks a foreground parallax element; the value is its speed factor.
pub const ATTR_PARALLAX: &str = "data-parallax";
/// Marks a background-image parallax element; the value is its speed factor.
pub const ATTR_PARALLAX_BG: &str = "data-parallax-bg";
/// Position hint for parallax elements. Stored but never applied.
///
/// The doubled `r` is the spelling existing markup uses.
pub const ATTR_PARALLAX_POSITION: &str = "data-parrallax-position";

/// Root class present while the reveal effect is enabled.
pub const CLASS_REVEAL_ENABLED: &str = "scroll-to-reveal";
/// Root class present while the parallax effect is enabled.
pub const CLASS_PARALLAX_ENABLED: &str = "scroll-to-parallax";
/// Per-element class keeping a reveal element hidden until it reveals.
pub const CLASS_REVEAL_HIDE: &str = "scroll-to-reveal-hide";
/// Per-element class marking an active parallax element.
pub const CLASS_HAS_PARALLAX: &str = "has-parallax";

/// Inline style carrying a reveal delay.
pub const STYLE_ANIMATION_DELAY: &str = "animation-delay";
/// Inline style carrying a foreground parallax shift.
pub const STYLE_TRANSFORM: &str = "transform";
/// Inline style carrying a background parallax shift.
pub const STYLE_BACKGROUND_POSITION: &str = "background-position";

/// Horizontal component written with every background shift.
pub const BACKGROUND_ANCHOR: &str = "center";

/// Formats a pixel length, e.g. `100px` or `-37.5px`.
///
/// Whole numbers print without a fractional part and negative zero prints as
/// `0`, the way script engines stringify numbers.
#[must_use]
pub fn css_px(value: f64) -> String {
    // Adding +0.0 folds -0.0 into +0.0.
    format!("{}px", value + 0.0)
}

/// `translate(0, <y>px)` for a foreground shift.
#[must_use]
pub fn translate_y(y: f64) -> String {
    format!("translate(0, {})", css_px(y))
}

/// `center <y>px` for a background shift.
#[must_use]
pub fn background_y(y: f64) -> String {
    format!("{BACKGROUND_ANCHOR} {}", css_px(y))
}

/// `<n>ms` for an animation delay.
#[must_use]
pub fn delay_ms(ms: i64) -> String {
    format!("{ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_lengths_print_like_script_numbers() {
        assert_eq!(css_px(100.0), "100px", "integral value has no fraction");
        assert_eq!(css_px(-37.5), "-37.5px", "fraction kept");
        assert_eq!(css_px(-0.0), "0px", "negative zero folded");
    }

    #[test]
    fn style_values() {
        assert_eq!(translate_y(100.0), "translate(0, 100px)", "translate form");
        assert_eq!(background_y(100.0), "center 100px", "background form");
        assert_eq!(delay_ms(250), "250ms", "delay form");
    }
}
