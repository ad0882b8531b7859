// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tunables and literal coefficients used by the engine. None of these are runtime
//! configurable; they are part of the documented behavior.

// Channel ranges.
pub const CHANNEL_MAX: f64 = 255.0;
pub const PERCENT_MAX: f64 = 100.0;
pub const HUE_MAX: f64 = 360.0;

// Hex literals.
pub const HASH: &str = "#";
pub const HASH_CHAR: char = '#';

// WCAG 2.x relative luminance.
pub const WCAG_LINEAR_THRESHOLD: f64 = 0.039_28;
pub const WCAG_RED_WEIGHT: f64 = 0.2126;
pub const WCAG_GREEN_WEIGHT: f64 = 0.7152;
pub const WCAG_BLUE_WEIGHT: f64 = 0.0722;
pub const WCAG_FLARE: f64 = 0.05;

// WCAG compliance thresholds.
pub const WCAG_AA_RATIO: f64 = 4.5;
pub const WCAG_AA_LARGE_RATIO: f64 = 3.0;
pub const WCAG_AAA_RATIO: f64 = 7.0;
pub const WCAG_AAA_LARGE_RATIO: f64 = 4.5;

/// Empirical luminance midpoint above which dark text reads better than light text.
pub const LIGHT_COLOR_LUMINANCE_THRESHOLD: f64 = 0.179;

// sRGB transfer function (used by the LAB pipeline).
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.040_45;
pub const SRGB_GAMMA_THRESHOLD: f64 = 0.003_130_8;

/// sRGB (linear) to CIE XYZ.
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// CIE XYZ to sRGB (linear). Inverse of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

/// D65 reference white, `[Xn, Yn, Zn]`.
pub const D65_WHITE: [f64; 3] = [0.950_47, 1.0, 1.088_83];

pub const CIE_EPSILON: f64 = 0.008_856;
pub const CIE_KAPPA: f64 = 903.3;

// Scales and gradients.
pub const DEFAULT_SCALE_COUNT: usize = 5;
pub const MONOCHROMATIC_MIN_LIGHTNESS: f64 = 10.0;
pub const MONOCHROMATIC_MAX_LIGHTNESS: f64 = 90.0;
pub const DEFAULT_GRADIENT_ANGLE: f64 = 180.0;
