// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::RgbColor;

/// The small set of CSS color keywords that [`crate::parse_color`] understands. Lookup
/// is case insensitive, and both spellings of gray are accepted.
///
/// ```
/// use r3bl_color::{NamedColor, RgbColor};
///
/// let it: NamedColor = "Grey".parse().unwrap();
/// assert_eq!(it, NamedColor::Gray);
/// assert_eq!(it.to_string(), "gray");
/// assert_eq!(RgbColor::from(it), RgbColor::from_u8(128, 128, 128));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedColor {
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
    Pink,
    #[strum(to_string = "gray", serialize = "grey")]
    Gray,
    Transparent,
}

impl From<NamedColor> for RgbColor {
    fn from(named_color: NamedColor) -> Self {
        match named_color {
            NamedColor::White => RgbColor::WHITE,
            NamedColor::Black => RgbColor::BLACK,
            NamedColor::Red => RgbColor::from_u8(255, 0, 0),
            NamedColor::Green => RgbColor::from_u8(0, 128, 0),
            NamedColor::Blue => RgbColor::from_u8(0, 0, 255),
            NamedColor::Yellow => RgbColor::from_u8(255, 255, 0),
            NamedColor::Cyan => RgbColor::from_u8(0, 255, 255),
            NamedColor::Magenta => RgbColor::from_u8(255, 0, 255),
            NamedColor::Orange => RgbColor::from_u8(255, 165, 0),
            NamedColor::Purple => RgbColor::from_u8(128, 0, 128),
            NamedColor::Pink => RgbColor::from_u8(255, 192, 203),
            NamedColor::Gray => RgbColor::from_u8(128, 128, 128),
            NamedColor::Transparent => RgbColor::BLACK.with_alpha(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("white", NamedColor::White)]
    #[test_case("GREEN", NamedColor::Green)]
    #[test_case("Gray", NamedColor::Gray)]
    #[test_case("grey", NamedColor::Gray)]
    #[test_case("transparent", NamedColor::Transparent)]
    fn test_from_str(input: &str, expected: NamedColor) {
        assert_eq2!(input.parse::<NamedColor>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_name() {
        assert!("chartreuse".parse::<NamedColor>().is_err());
        assert!("".parse::<NamedColor>().is_err());
    }

    #[test]
    fn test_css_keyword_values() {
        assert_eq2!(
            RgbColor::from(NamedColor::Green),
            RgbColor::from_u8(0, 128, 0)
        );
        assert_eq2!(
            RgbColor::from(NamedColor::Pink).to_hex(false),
            "#ffc0cb"
        );
        let transparent = RgbColor::from(NamedColor::Transparent);
        assert_eq2!(transparent.alpha, 0.0);
        assert_eq2!(transparent.to_hex(true), "#00000000");
    }

    #[test]
    fn test_display_round_trips() {
        for named_color in NamedColor::iter() {
            let name = named_color.to_string();
            assert_eq2!(name.parse::<NamedColor>().unwrap(), named_color);
        }
    }
}
