//! Conversions between [`PixelBuffer`] and the `image` crate's buffers.
//!
//! `image` stores color pixels as RGB while [`PixelBuffer`] keeps BGR, so
//! color conversions swap the first and last sample of every pixel.

use image::{DynamicImage, GrayImage, RgbImage};

use super::{PixelBuffer, Shape, COLOR_CHANNELS, GRAY_CHANNELS};
use crate::error::{Error, Result};

fn swap_red_blue(samples: &mut [u8]) {
    for pixel in samples.chunks_exact_mut(COLOR_CHANNELS) {
        pixel.swap(0, 2);
    }
}

fn dimension(name: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::InvalidParameter {
        name,
        reason: format!("{} does not fit into u32", value),
    })
}

impl From<&GrayImage> for PixelBuffer {
    fn from(img: &GrayImage) -> Self {
        let shape = Shape::new(img.height() as usize, img.width() as usize, GRAY_CHANNELS);
        return PixelBuffer::from_parts(shape, img.as_raw().clone());
    }
}

impl From<&RgbImage> for PixelBuffer {
    fn from(img: &RgbImage) -> Self {
        let shape = Shape::new(img.height() as usize, img.width() as usize, COLOR_CHANNELS);
        let mut data = img.as_raw().clone();
        swap_red_blue(&mut data);
        return PixelBuffer::from_parts(shape, data);
    }
}

impl From<&DynamicImage> for PixelBuffer {
    /// 8-bit gray images stay single channel, anything with color becomes BGR.
    fn from(img: &DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(gray) => PixelBuffer::from(gray),
            DynamicImage::ImageRgb8(rgb) => PixelBuffer::from(rgb),
            other if other.color().has_color() => PixelBuffer::from(&other.to_rgb8()),
            other => PixelBuffer::from(&other.to_luma8()),
        }
    }
}

impl PixelBuffer {
    pub fn to_gray_image(&self) -> Result<GrayImage> {
        self.require_channels(GRAY_CHANNELS)?;
        let (width, height) = (dimension("cols", self.cols())?, dimension("rows", self.rows())?);
        return GrayImage::from_raw(width, height, self.samples().to_vec())
            .ok_or(Error::BufferLength { expected: self.shape().len(), actual: self.len() });
    }

    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        self.require_channels(COLOR_CHANNELS)?;
        let (width, height) = (dimension("cols", self.cols())?, dimension("rows", self.rows())?);
        let mut data = self.samples().to_vec();
        swap_red_blue(&mut data);
        return RgbImage::from_raw(width, height, data)
            .ok_or(Error::BufferLength { expected: self.shape().len(), actual: self.len() });
    }

    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        if self.channels() == GRAY_CHANNELS {
            return self.to_gray_image().map(DynamicImage::ImageLuma8);
        }
        self.to_rgb_image().map(DynamicImage::ImageRgb8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn rgb_becomes_bgr() {
        let img = RgbImage::from_pixel(2, 1, Rgb([30, 20, 10]));
        let buffer = PixelBuffer::from(&img);
        assert_eq!(buffer.shape(), Shape::new(1, 2, 3));
        assert_eq!(buffer.pixel(0, 1), Some(&[10, 20, 30][..]));
        assert_eq!(buffer.to_rgb_image().unwrap(), img);
    }

    #[test]
    fn gray_keeps_rows_and_cols() {
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(x + 10 * y) as u8]));
        let buffer = PixelBuffer::from(&img);
        assert_eq!(buffer.rows(), 2);
        assert_eq!(buffer.cols(), 3);
        assert_eq!(buffer.get(1, 2, 0), Some(12));
        assert_eq!(buffer.to_gray_image().unwrap(), img);
    }

    #[test]
    fn dynamic_images_pick_channel_count() {
        let gray = DynamicImage::new_luma8(4, 4);
        assert_eq!(PixelBuffer::from(&gray).channels(), 1);
        let rgba = DynamicImage::new_rgba8(4, 4);
        assert_eq!(PixelBuffer::from(&rgba).channels(), 3);
        let buffer = PixelBuffer::zeros(2, 2, 3).unwrap();
        assert!(matches!(buffer.to_dynamic_image(), Ok(DynamicImage::ImageRgb8(_))));
    }

    #[test]
    fn channel_count_is_checked() {
        let buffer = PixelBuffer::zeros(2, 2, 3).unwrap();
        assert!(matches!(buffer.to_gray_image(), Err(Error::InvalidChannelCount { .. })));
    }
}
