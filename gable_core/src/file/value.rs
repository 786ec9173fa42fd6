// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversions between values and their textual form in widget and theme files.

use kurbo::{Point, Size};
use peniko::Color;

use crate::core::{Outline, PropertyError};

/// Quote a string, escaping backslashes, quotes, newlines and tabs.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parse a quoted string, undoing the escapes of [`quote_string`].
///
/// Unquoted input is returned trimmed, as-is.
pub fn unquote_string(value: &str) -> Result<String, PropertyError> {
    let value = value.trim();
    let Some(inner) = value.strip_prefix('"') else {
        return Ok(value.to_string());
    };
    let Some(inner) = inner.strip_suffix('"') else {
        return Err(PropertyError::invalid("string", value));
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            _ => return Err(PropertyError::invalid("string", value)),
        }
    }
    Ok(out)
}

/// Parse `true` or `false`; the first letter may be uppercase.
pub fn parse_bool(value: &str) -> Result<bool, PropertyError> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(PropertyError::invalid("bool", other)),
    }
}

/// Format a boolean.
pub fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Parse a finite number.
pub fn parse_number(value: &str) -> Result<f64, PropertyError> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(PropertyError::invalid("number", trimmed)),
    }
}

/// Format a number without a trailing `.0` for integral values.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Only integral values well inside the i64 range are cast"
)]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn parse_tuple<const N: usize>(value: &str, kind: &'static str) -> Result<[f64; N], PropertyError> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(|| PropertyError::invalid(kind, trimmed))?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != N {
        return Err(PropertyError::invalid(kind, trimmed));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_number(part).map_err(|_| PropertyError::invalid(kind, trimmed))?;
    }
    Ok(out)
}

/// Parse a `(x, y)` pair as a point.
pub fn parse_point(value: &str) -> Result<Point, PropertyError> {
    let [x, y] = parse_tuple::<2>(value, "vector")?;
    Ok(Point::new(x, y))
}

/// Parse a `(width, height)` pair as a size.
pub fn parse_size(value: &str) -> Result<Size, PropertyError> {
    let [width, height] = parse_tuple::<2>(value, "vector")?;
    if width < 0.0 || height < 0.0 {
        return Err(PropertyError::invalid("size", value.trim()));
    }
    Ok(Size::new(width, height))
}

/// Format a pair as `(x, y)`.
pub fn format_pair(x: f64, y: f64) -> String {
    format!("({}, {})", format_number(x), format_number(y))
}

/// Parse an outline: a single number, `(horizontal, vertical)` or
/// `(left, top, right, bottom)`.
pub fn parse_outline(value: &str) -> Result<Outline, PropertyError> {
    let trimmed = value.trim();
    if !trimmed.starts_with('(') {
        return Ok(Outline::uniform(parse_number(trimmed)?));
    }
    if let Ok([horizontal, vertical]) = parse_tuple::<2>(trimmed, "outline") {
        return Ok(Outline::new(horizontal, vertical, horizontal, vertical));
    }
    let [left, top, right, bottom] = parse_tuple::<4>(trimmed, "outline")?;
    Ok(Outline::new(left, top, right, bottom))
}

/// Format an outline as `(left, top, right, bottom)`.
pub fn format_outline(outline: &Outline) -> String {
    format!(
        "({}, {}, {}, {})",
        format_number(outline.left),
        format_number(outline.top),
        format_number(outline.right),
        format_number(outline.bottom)
    )
}

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 255, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("transparent", [0, 0, 0, 0]),
];

fn hex_digit_pair(hex: &str, index: usize) -> Option<u8> {
    u8::from_str_radix(hex.get(index..index + 2)?, 16).ok()
}

/// Parse a color: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`, `rgba(r, g, b, a)`
/// or one of a few names.
pub fn parse_color(value: &str) -> Result<Color, PropertyError> {
    let trimmed = value.trim();
    let invalid = || PropertyError::invalid("color", trimmed);

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        return match hex.len() {
            3 => {
                let mut rgb = [0_u8; 3];
                for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                    let digit = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = digit * 17;
                }
                Ok(Color::from_rgba8(rgb[0], rgb[1], rgb[2], 255))
            }
            6 | 8 => {
                let r = hex_digit_pair(hex, 0).ok_or_else(invalid)?;
                let g = hex_digit_pair(hex, 2).ok_or_else(invalid)?;
                let b = hex_digit_pair(hex, 4).ok_or_else(invalid)?;
                let a = if hex.len() == 8 {
                    hex_digit_pair(hex, 6).ok_or_else(invalid)?
                } else {
                    255
                };
                Ok(Color::from_rgba8(r, g, b, a))
            }
            _ => Err(invalid()),
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    let components = if let Some(inner) = lower.strip_prefix("rgba") {
        Some((inner, 4))
    } else {
        lower.strip_prefix("rgb").map(|inner| (inner, 3))
    };
    if let Some((inner, count)) = components {
        let inner = inner
            .trim()
            .strip_prefix('(')
            .and_then(|v| v.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != count {
            return Err(invalid());
        }
        let mut rgba = [255_u8; 4];
        for (slot, part) in rgba.iter_mut().zip(parts) {
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        return Ok(Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, [r, g, b, a])| Color::from_rgba8(*r, *g, *b, *a))
        .ok_or_else(invalid)
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when it isn't opaque.
pub fn format_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}
