//! Reduction of BGR buffers to a single gray channel.

use log::trace;

use crate::error::Result;
use crate::image_arithmetic::color_reductions::{arithmetic_mean, weighted_mean};
use crate::image_arithmetic::{PixelBuffer, COLOR_CHANNELS, GRAY_CHANNELS};

/// Gray conversions of one validated 3-channel source.
///
/// ```
/// use image_algebra::{GrayScale, PixelBuffer};
///
/// # fn main() -> image_algebra::Result<()> {
/// let bgr = PixelBuffer::new(1, 1, 3, vec![10, 20, 30])?;
/// let converter = GrayScale::new(&bgr)?;
/// assert_eq!(converter.arithmetic().samples(), &[20]);
/// assert_eq!(converter.weighted().samples(), &[22]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GrayScale<'a> {
    source: &'a PixelBuffer,
}

impl<'a> GrayScale<'a> {
    pub fn new(source: &'a PixelBuffer) -> Result<Self> {
        source.require_channels(COLOR_CHANNELS)?;
        return Ok(Self { source });
    }

    pub fn source(&self) -> &'a PixelBuffer {
        self.source
    }

    /// `floor((B + G + R) / 3)` per pixel.
    pub fn arithmetic(&self) -> PixelBuffer {
        self.reduce(arithmetic_mean)
    }

    /// `round(0.114 B + 0.587 G + 0.299 R)` per pixel.
    pub fn weighted(&self) -> PixelBuffer {
        self.reduce(weighted_mean)
    }

    /// Same as [`GrayScale::arithmetic`].
    pub fn gray(&self) -> PixelBuffer {
        self.arithmetic()
    }

    fn reduce(&self, f: fn(&[u8]) -> u8) -> PixelBuffer {
        trace!("grayscale reduction of {}", self.source.shape());
        let shape = self.source.shape().with_channels(GRAY_CHANNELS);
        return PixelBuffer::from_parts(shape, self.source.pixels().map(f).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn single_pixel_scenario() {
        let bgr = PixelBuffer::new(1, 1, 3, vec![10, 20, 30]).unwrap();
        let converter = GrayScale::new(&bgr).unwrap();
        assert_eq!(converter.arithmetic().samples(), &[20]);
        assert_eq!(converter.weighted().samples(), &[22]);
        assert_eq!(converter.gray(), converter.arithmetic());
    }

    #[test]
    fn output_is_single_channel_with_same_dimensions() {
        let bgr =
            PixelBuffer::from_fn(3, 5, 3, |r, c, ch| (r * 40 + c * 7 + ch * 3) as u8).unwrap();
        let converter = GrayScale::new(&bgr).unwrap();
        for gray in [converter.arithmetic(), converter.weighted()] {
            assert_eq!(gray.rows(), 3);
            assert_eq!(gray.cols(), 5);
            assert_eq!(gray.channels(), 1);
        }
    }

    #[test]
    fn repeated_conversion_is_identical() {
        let bgr =
            PixelBuffer::from_fn(4, 4, 3, |r, c, ch| (r * 61 + c * 17 + ch * 89) as u8).unwrap();
        let converter = GrayScale::new(&bgr).unwrap();
        assert_eq!(converter.weighted(), converter.weighted());
        assert_eq!(converter.arithmetic(), GrayScale::new(&bgr).unwrap().arithmetic());
    }

    #[test]
    fn gray_source_is_rejected() {
        let gray = PixelBuffer::zeros(2, 2, 1).unwrap();
        assert_eq!(
            GrayScale::new(&gray).err(),
            Some(Error::InvalidChannelCount { expected: "3", actual: 1 })
        );
    }

    #[test]
    fn empty_source_gives_empty_output() {
        let empty = PixelBuffer::zeros(0, 0, 3).unwrap();
        assert!(GrayScale::new(&empty).unwrap().weighted().is_empty());
    }
}
