//! Per-sample threshold transforms.

use log::trace;

use crate::error::Result;
use crate::image_arithmetic::{PixelBuffer, SAMPLE_MAX};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ThresholdMode {
    /// `p > t ? cap : 0`
    Binary,
    /// `p > t ? 0 : cap`
    BinaryInv,
    /// `p > t ? t : p`
    Truncate,
    /// `p > t ? p : 0`
    ToZero,
    /// `p > t ? 0 : p`
    ToZeroInv,
}

impl ThresholdMode {
    pub const ALL: [ThresholdMode; 5] = [
        ThresholdMode::Binary,
        ThresholdMode::BinaryInv,
        ThresholdMode::Truncate,
        ThresholdMode::ToZero,
        ThresholdMode::ToZeroInv,
    ];

    /// Transforms one sample. The comparison is strict: `p == level` counts as below.
    pub fn apply_sample(self, sample: u8, params: ThresholdParams) -> u8 {
        let above = sample > params.level;
        match self {
            ThresholdMode::Binary => {
                if above {
                    params.cap
                } else {
                    0
                }
            }
            ThresholdMode::BinaryInv => {
                if above {
                    0
                } else {
                    params.cap
                }
            }
            ThresholdMode::Truncate => {
                if above {
                    params.level
                } else {
                    sample
                }
            }
            ThresholdMode::ToZero => {
                if above {
                    sample
                } else {
                    0
                }
            }
            ThresholdMode::ToZeroInv => {
                if above {
                    0
                } else {
                    sample
                }
            }
        }
    }
}

/// Threshold level and the value binary modes write for "set" samples.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ThresholdParams {
    pub level: u8,
    /// Only read by [`ThresholdMode::Binary`] and [`ThresholdMode::BinaryInv`].
    pub cap: u8,
}

impl ThresholdParams {
    pub const fn new(level: u8) -> Self {
        return Self { level, cap: SAMPLE_MAX };
    }

    pub const fn with_cap(self, cap: u8) -> Self {
        return Self { cap, ..self };
    }
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Applies `mode` to every sample of a 1- or 3-channel buffer, channels independently.
pub fn apply(
    img: &PixelBuffer, params: ThresholdParams, mode: ThresholdMode,
) -> Result<PixelBuffer> {
    img.require_non_empty()?;
    trace!("{:?} threshold at {} on {}", mode, params.level, img.shape());
    return Ok(img.map_samples(|p| mode.apply_sample(p, params)));
}

pub fn binary(img: &PixelBuffer, level: u8, cap: u8) -> Result<PixelBuffer> {
    apply(img, ThresholdParams::new(level).with_cap(cap), ThresholdMode::Binary)
}

pub fn binary_inv(img: &PixelBuffer, level: u8, cap: u8) -> Result<PixelBuffer> {
    apply(img, ThresholdParams::new(level).with_cap(cap), ThresholdMode::BinaryInv)
}

pub fn truncate(img: &PixelBuffer, level: u8) -> Result<PixelBuffer> {
    apply(img, ThresholdParams::new(level), ThresholdMode::Truncate)
}

pub fn to_zero(img: &PixelBuffer, level: u8) -> Result<PixelBuffer> {
    apply(img, ThresholdParams::new(level), ThresholdMode::ToZero)
}

pub fn to_zero_inv(img: &PixelBuffer, level: u8) -> Result<PixelBuffer> {
    apply(img, ThresholdParams::new(level), ThresholdMode::ToZeroInv)
}
