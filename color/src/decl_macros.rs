// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Asserts that every channel of two [`crate::RgbColor`] values differs by at most
/// `tolerance`. Conversions that pass through real valued models (HSL, HSB, CMYK, LAB)
/// round on the way back, so exact equality is the wrong thing to check for.
///
/// ```
/// use r3bl_color::{RgbColor, assert_rgb_within};
///
/// let lhs = RgbColor::from_u8(10, 20, 30);
/// let rhs = RgbColor::from_u8(11, 20, 29);
/// assert_rgb_within!(lhs, rhs, 1);
/// ```
#[macro_export]
macro_rules! assert_rgb_within {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let left: $crate::RgbColor = $left;
        let right: $crate::RgbColor = $right;
        let tolerance: u8 = $tolerance;
        let deltas = (
            left.red.abs_diff(right.red),
            left.green.abs_diff(right.green),
            left.blue.abs_diff(right.blue),
        );
        assert!(
            deltas.0 <= tolerance && deltas.1 <= tolerance && deltas.2 <= tolerance,
            "channels differ by {deltas:?}, more than {tolerance}\nleft : {left:?}\nright: {right:?}",
        );
    }};
}
