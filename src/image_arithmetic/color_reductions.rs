//! Per-pixel reductions of a BGR triple to one gray sample.

use super::utilities::saturate_rounded;

pub const BLUE_WEIGHT: f64 = 0.114;
pub const GREEN_WEIGHT: f64 = 0.587;
pub const RED_WEIGHT: f64 = 0.299;

/// `floor((B + G + R) / 3)`.
pub fn arithmetic_mean(bgr: &[u8]) -> u8 {
    let sum = u16::from(bgr[0]) + u16::from(bgr[1]) + u16::from(bgr[2]);
    (sum / 3) as u8
}

/// `round(0.114 B + 0.587 G + 0.299 R)`, clamped.
pub fn weighted_mean(bgr: &[u8]) -> u8 {
    let luma = BLUE_WEIGHT * f64::from(bgr[0])
        + GREEN_WEIGHT * f64::from(bgr[1])
        + RED_WEIGHT * f64::from(bgr[2]);
    saturate_rounded(luma)
}
