use num_traits::{clamp, ToPrimitive};

use super::SAMPLE_MAX;

const SAMPLE_RANGE: f64 = SAMPLE_MAX as f64;

/// Clamps `value` into `[0, 255]` and truncates toward zero. NaN saturates to 0.
pub fn saturate<T: ToPrimitive>(value: T) -> u8 {
    let value = value.to_f64().unwrap_or(0.0);
    if value.is_nan() {
        return 0;
    }
    return clamp(value, 0.0, SAMPLE_RANGE) as u8;
}

/// Like [`saturate`], but rounds half away from zero first.
pub fn saturate_rounded(value: f64) -> u8 {
    saturate(value.round())
}

/// Maps a sample into `[0, 1]`.
pub fn unit_interval(sample: u8) -> f64 {
    f64::from(sample) / SAMPLE_RANGE
}

/// Maps a `[0, 1]` value back onto the sample range, saturating.
pub fn from_unit_interval(value: f64) -> u8 {
    saturate(value * SAMPLE_RANGE)
}

pub fn mean<T: ToPrimitive + Copy>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().map(|value| value.to_f64().unwrap_or(0.0)).sum();
    return sum / (data.len() as f64);
}
