// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous utility functions.

/// Panic in debug and `tracing::error` in release mode.
///
/// This macro is in some way a combination of `panic` and `debug_assert`,
/// but it will log the provided message instead of ignoring it in release builds.
///
/// It's useful when a backtrace would aid debugging but a crash can be avoided in release.
#[macro_export]
macro_rules! debug_panic {
    ($msg:expr$(,)?) => {
        if cfg!(debug_assertions) {
            panic!($msg);
        } else {
            tracing::error!($msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            tracing::error!($fmt, $($arg)*);
        }
    };
}

pub use crate::debug_panic;

/// Clamps an opacity value to the `0.0..=1.0` range.
///
/// Non-finite values are treated as fully opaque, and logged.
pub fn sanitize_opacity(opacity: f32) -> f32 {
    if !opacity.is_finite() {
        tracing::warn!("Opacity must be finite. Received: {opacity}");
        return 1.0;
    }
    opacity.clamp(0.0, 1.0)
}

/// Compares names the way widget and property lookups do: ASCII case-insensitively.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(sanitize_opacity(1.5), 1.0);
        assert_eq!(sanitize_opacity(-0.5), 0.0);
        assert_eq!(sanitize_opacity(0.25), 0.25);
        assert_eq!(sanitize_opacity(f32::NAN), 1.0);
    }

    #[test]
    fn names_ignore_case() {
        assert!(names_match("BackgroundColor", "backgroundcolor"));
        assert!(!names_match("Text", "TextColor"));
    }
}
