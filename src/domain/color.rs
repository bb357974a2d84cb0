// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/color.rs
//
// Border color parsing.

use image::Rgb;

use crate::error::{SheetError, SheetResult};

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("red", [255, 0, 0]),
];

/// Parse `#RGB`, `#RRGGBB` (leading `#` optional) or a few color names.
pub fn parse_color(input: &str) -> SheetResult<Rgb<u8>> {
    let trimmed = input.trim();
    let invalid = || SheetError::InvalidColor(input.to_string());

    if let Some((_, rgb)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(Rgb(*rgb));
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, slot) in rgb.iter_mut().enumerate() {
                let nibble = channel(&hex[i..=i])?;
                *slot = nibble * 17;
            }
            Ok(Rgb(rgb))
        }
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_hex() {
        assert_eq!(parse_color("#CCCCCC").unwrap(), Rgb([204, 204, 204]));
        assert_eq!(parse_color("1a2B3c").unwrap(), Rgb([0x1a, 0x2b, 0x3c]));
    }

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(parse_color("#f80").unwrap(), Rgb([255, 136, 0]));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(parse_color("White").unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12345", "#GGGGGG", "#ccc ccc", "chartreuse", "#ééé"] {
            assert!(
                matches!(parse_color(bad), Err(SheetError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }
}
