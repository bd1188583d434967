//! Splitting, isolating and recombining the blue, green and red channels.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::image_arithmetic::{Channel, PixelBuffer, COLOR_CHANNELS, GRAY_CHANNELS, SAMPLE_MAX};

fn require_color(img: &PixelBuffer) -> Result<()> {
    img.require_non_empty()?;
    img.require_channels(COLOR_CHANNELS)
}

/// One channel of a BGR buffer as a gray buffer.
pub fn extract_channel(img: &PixelBuffer, channel: Channel) -> Result<PixelBuffer> {
    require_color(img)?;
    trace!("extracting {} from {}", channel, img.shape());
    let data = img.pixels().map(|pixel| pixel[channel.index()]).collect();
    return Ok(PixelBuffer::from_parts(img.shape().with_channels(GRAY_CHANNELS), data));
}

pub fn extract_blue(img: &PixelBuffer) -> Result<PixelBuffer> {
    extract_channel(img, Channel::Blue)
}

pub fn extract_green(img: &PixelBuffer) -> Result<PixelBuffer> {
    extract_channel(img, Channel::Green)
}

pub fn extract_red(img: &PixelBuffer) -> Result<PixelBuffer> {
    extract_channel(img, Channel::Red)
}

/// Keeps `channel` and zeroes the other two, staying 3-channel.
pub fn isolate_channel(img: &PixelBuffer, channel: Channel) -> Result<PixelBuffer> {
    require_color(img)?;
    trace!("isolating {} in {}", channel, img.shape());
    let keep = channel.index();
    let data = img
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &sample)| if i % COLOR_CHANNELS == keep { sample } else { 0 })
        .collect();
    return Ok(PixelBuffer::from_parts(img.shape(), data));
}

pub fn isolate_blue(img: &PixelBuffer) -> Result<PixelBuffer> {
    isolate_channel(img, Channel::Blue)
}

pub fn isolate_green(img: &PixelBuffer) -> Result<PixelBuffer> {
    isolate_channel(img, Channel::Green)
}

pub fn isolate_red(img: &PixelBuffer) -> Result<PixelBuffer> {
    isolate_channel(img, Channel::Red)
}

/// Interleaves three gray buffers of identical dimensions into one BGR buffer.
pub fn combine_channels(
    blue: &PixelBuffer, green: &PixelBuffer, red: &PixelBuffer,
) -> Result<PixelBuffer> {
    for plane in [blue, green, red] {
        plane.require_non_empty()?;
        plane.require_channels(GRAY_CHANNELS)?;
    }
    blue.require_compatible(green)?;
    blue.require_compatible(red)?;
    trace!("combining three {} planes", blue.shape());
    let mut data = Vec::with_capacity(blue.len() * COLOR_CHANNELS);
    for ((&b, &g), &r) in blue.samples().iter().zip(green.samples()).zip(red.samples()) {
        data.extend_from_slice(&[b, g, r]);
    }
    return Ok(PixelBuffer::from_parts(blue.shape().with_channels(COLOR_CHANNELS), data));
}

/// `255 - p` for every sample of a 1- or 3-channel buffer.
pub fn invert(img: &PixelBuffer) -> Result<PixelBuffer> {
    img.require_non_empty()?;
    if img.channels() != GRAY_CHANNELS && img.channels() != COLOR_CHANNELS {
        debug!("cannot invert {}", img.shape());
        return Err(Error::InvalidChannelCount { expected: "1 or 3", actual: img.channels() });
    }
    return Ok(img.map_samples(|p| SAMPLE_MAX - p));
}
