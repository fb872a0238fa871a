//! Aspect-ratio parsing and the padding-bottom value of the ratio box.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::DEFAULT_ASPECT_RATIO;
use super::warnings::Warnings;
use crate::services::errors::LazyVideoError;

static ASPECT_RATIO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+:\d+$").expect("aspect ratio pattern is valid"));

/// Whether `value` has the `W:H` shape (digits only).
pub fn is_aspect_ratio(value: &str) -> bool {
    ASPECT_RATIO_REGEX.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio {
            width: 16.0,
            height: 9.0,
        }
    }
}

impl FromStr for AspectRatio {
    type Err = LazyVideoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || LazyVideoError::InvalidAspectRatio {
            value: value.to_string(),
        };

        if !is_aspect_ratio(value) {
            return Err(invalid());
        }

        let (width, height) = value.split_once(':').ok_or_else(invalid)?;
        let width: f64 = width.parse().map_err(|_| invalid())?;
        let height: f64 = height.parse().map_err(|_| invalid())?;

        // Height is divided by width; a zero height is a flat 0% box.
        if width == 0.0 {
            return Err(invalid());
        }

        Ok(AspectRatio { width, height })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl AspectRatio {
    /// Parse `value`, substituting 16:9 and recording one warning when it is
    /// not a usable ratio.
    pub fn parse_or_default(value: &str, warnings: &mut Warnings) -> Self {
        value.parse().unwrap_or_else(|_| {
            warnings.push(format!(
                "Invalid value {value} supplied to `aspectRatio` property, instead fallback value {DEFAULT_ASPECT_RATIO} is used"
            ));
            AspectRatio::default()
        })
    }

    /// Vertical padding as a percentage of the width.
    pub fn padding_percent(&self) -> f64 {
        (self.height / self.width) * 100.0
    }

    /// CSS `padding-bottom` value, e.g. `56.25%` for 16:9.
    pub fn padding_bottom(&self) -> String {
        format!("{}%", self.padding_percent())
    }
}

/// Resolve an aspect-ratio string straight to its `padding-bottom` value.
pub fn get_padding_bottom(value: &str, warnings: &mut Warnings) -> String {
    AspectRatio::parse_or_default(value, warnings).padding_bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratio() {
        let mut warnings = Warnings::new();
        assert_eq!(get_padding_bottom("16:9", &mut warnings), "56.25%");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_ratios() {
        let mut warnings = Warnings::new();
        for (a, b) in [(4u32, 3u32), (1, 1), (21, 9), (9, 16), (3, 1)] {
            let expected = format!("{}%", (b as f64 / a as f64) * 100.0);
            assert_eq!(get_padding_bottom(&format!("{a}:{b}"), &mut warnings), expected);
        }
        assert!(warnings.is_empty());
        assert_eq!(get_padding_bottom("4:3", &mut warnings), "75%");
        assert_eq!(get_padding_bottom("1:1", &mut warnings), "100%");
    }

    #[test]
    fn test_invalid_ratio_falls_back_with_one_warning() {
        let mut warnings = Warnings::new();
        assert_eq!(get_padding_bottom("foo", &mut warnings), format!("{}%", (9.0 / 16.0) * 100.0));
        assert_eq!(warnings.len(), 1);
        assert!(warnings.iter().next().unwrap().contains("Invalid value foo"));
    }

    #[test]
    fn test_malformed_shapes_are_rejected() {
        for value in ["16/9", "16:", ":9", " 16:9", "16:9 ", "1.5:1", "-4:3", ""] {
            assert!(value.parse::<AspectRatio>().is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let mut warnings = Warnings::new();
        assert_eq!(AspectRatio::parse_or_default("0:9", &mut warnings), AspectRatio::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_zero_height_is_a_flat_box() {
        let mut warnings = Warnings::new();
        assert_eq!(get_padding_bottom("16:0", &mut warnings), "0%");
        assert!(warnings.is_empty());
    }
}
