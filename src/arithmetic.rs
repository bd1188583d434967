//! Saturating arithmetic between images and between an image and a scalar.
//!
//! All results are clamped into `[0, 255]`; nothing wraps around. The same rule
//! is applied to every sample, so gray and BGR buffers behave identically.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::image_arithmetic::{
    from_unit_interval, saturate, saturate_rounded, unit_interval, ArithmeticImage, PixelBuffer,
    SAMPLE_MAX,
};

fn check_pair(a: &PixelBuffer, b: &PixelBuffer) -> Result<()> {
    a.require_non_empty()?;
    b.require_non_empty()?;
    a.require_compatible(b)?;
    trace!("elementwise operation on {}", a.shape());
    Ok(())
}

fn add_samples(a: u8, b: u8) -> u8 {
    saturate(i16::from(a) + i16::from(b))
}

fn subtract_samples(a: u8, b: u8) -> u8 {
    saturate(i16::from(a) - i16::from(b))
}

fn multiply_samples(a: u8, b: u8) -> u8 {
    from_unit_interval(unit_interval(a) * unit_interval(b))
}

fn divide_samples(dividend: u8, divisor: u8) -> u8 {
    if divisor == 0 {
        return SAMPLE_MAX;
    }
    return saturate_rounded(f64::from(dividend) / f64::from(divisor) * f64::from(SAMPLE_MAX));
}

pub fn add(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    check_pair(a, b)?;
    return Ok(a.zip_samples(b, add_samples));
}

pub fn subtract(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    check_pair(a, b)?;
    return Ok(a.zip_samples(b, subtract_samples));
}

/// Treats both samples as fractions of 255, multiplies them and scales back.
pub fn multiply(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    check_pair(a, b)?;
    return Ok(a.zip_samples(b, multiply_samples));
}

/// `round(a / b * 255)` per sample; a zero divisor sample yields 255.
pub fn divide(dividend: &PixelBuffer, divisor: &PixelBuffer) -> Result<PixelBuffer> {
    check_pair(dividend, divisor)?;
    return Ok(dividend.zip_samples(divisor, divide_samples));
}

pub fn add_scalar(img: &PixelBuffer, scalar: f64) -> Result<PixelBuffer> {
    img.require_non_empty()?;
    trace!("adding {} to {}", scalar, img.shape());
    return Ok(img.map_samples(|p| saturate(f64::from(p) + scalar)));
}

pub fn subtract_scalar(img: &PixelBuffer, scalar: f64) -> Result<PixelBuffer> {
    add_scalar(img, -scalar)
}

pub fn multiply_scalar(img: &PixelBuffer, scalar: f64) -> Result<PixelBuffer> {
    img.require_non_empty()?;
    trace!("scaling {} by {}", img.shape(), scalar);
    return Ok(img.map_samples(|p| saturate(f64::from(p) * scalar)));
}

/// Multiplies by `1 / scalar`. A zero scalar is an error, unlike per-sample division.
pub fn divide_scalar(img: &PixelBuffer, scalar: f64) -> Result<PixelBuffer> {
    if scalar == 0.0 {
        debug!("refusing to divide {} by zero", img.shape());
        return Err(Error::InvalidParameter {
            name: "scalar",
            reason: "division by zero".to_string(),
        });
    }
    multiply_scalar(img, 1.0 / scalar)
}

impl ArithmeticImage for PixelBuffer {
    fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        divide(self, other)
    }

    fn add_scalar(&self, scalar: f64) -> Result<Self> {
        add_scalar(self, scalar)
    }

    fn subtract_scalar(&self, scalar: f64) -> Result<Self> {
        subtract_scalar(self, scalar)
    }

    fn multiply_scalar(&self, scalar: f64) -> Result<Self> {
        multiply_scalar(self, scalar)
    }

    fn divide_scalar(&self, scalar: f64) -> Result<Self> {
        divide_scalar(self, scalar)
    }
}
