use std::fmt;

use log::debug;

use crate::error::{Error, Result};

pub const GRAY_CHANNELS: usize = 1;
pub const COLOR_CHANNELS: usize = 3;
pub const SAMPLE_MAX: u8 = u8::MAX;

/// Dimensions of a buffer: `rows x cols`, `channels` interleaved samples per pixel.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
    pub channels: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize, channels: usize) -> Self {
        return Self { rows, cols, channels };
    }

    pub const fn total(self) -> usize {
        return self.rows * self.cols;
    }

    /// Number of samples. Only meaningful for shapes that passed [`Shape::checked_len`].
    pub const fn len(self) -> usize {
        return self.rows * self.cols * self.channels;
    }

    /// Number of samples, `None` when it does not fit into `usize`.
    pub const fn checked_len(self) -> Option<usize> {
        return match self.rows.checked_mul(self.cols) {
            Some(total) => total.checked_mul(self.channels),
            None => None,
        };
    }

    pub const fn is_empty(self) -> bool {
        return self.rows == 0 || self.cols == 0;
    }

    pub const fn with_channels(self, channels: usize) -> Self {
        return Self { channels, ..self };
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}x{}x{}", self.rows, self.cols, self.channels);
    }
}

/// Color channels in storage order (BGR).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Channel {
    Blue = 0,
    Green = 1,
    Red = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    pub const fn index(self) -> usize {
        return self as usize;
    }

    /// Full-intensity BGR color of this channel, used for drawing.
    pub const fn color(self) -> [u8; 3] {
        return match self {
            Channel::Blue => [SAMPLE_MAX, 0, 0],
            Channel::Green => [0, SAMPLE_MAX, 0],
            Channel::Red => [0, 0, SAMPLE_MAX],
        };
    }

    pub const fn name(self) -> &'static str {
        return match self {
            Channel::Blue => "blue",
            Channel::Green => "green",
            Channel::Red => "red",
        };
    }
}

impl TryFrom<usize> for Channel {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        return match index {
            0 => Ok(Channel::Blue),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Red),
            _ => {
                debug!("rejecting channel index {}", index);
                Err(Error::InvalidChannelIndex(index))
            }
        };
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

/// Owned, row-major grid of 8-bit samples with 1 (gray) or 3 (BGR) channels per pixel.
///
/// Buffers are never modified by the operations in this crate; every
/// operation returns a freshly allocated buffer.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct PixelBuffer {
    shape: Shape,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(rows: usize, cols: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let (shape, len) = sized_shape(rows, cols, channels)?;
        if data.len() != len {
            debug!("sample vector of length {} does not fit {}", data.len(), shape);
            return Err(Error::BufferLength { expected: len, actual: data.len() });
        }
        return Ok(Self { shape, data });
    }

    pub fn zeros(rows: usize, cols: usize, channels: usize) -> Result<Self> {
        return Self::filled(rows, cols, channels, 0);
    }

    pub fn filled(rows: usize, cols: usize, channels: usize, value: u8) -> Result<Self> {
        let (shape, len) = sized_shape(rows, cols, channels)?;
        return Ok(Self { shape, data: vec![value; len] });
    }

    /// Builds a buffer by evaluating `f(row, col, channel)` for every sample.
    pub fn from_fn<F>(rows: usize, cols: usize, channels: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let (shape, len) = sized_shape(rows, cols, channels)?;
        let mut data = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                for channel in 0..channels {
                    data.push(f(row, col, channel));
                }
            }
        }
        return Ok(Self { shape, data });
    }

    /// Single-channel buffer from equally long rows.
    pub fn gray_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(ragged) = rows.iter().map(|row| row.as_ref().len()).find(|&len| len != cols) {
            debug!("row of length {} in a buffer {} samples wide", ragged, cols);
            return Err(Error::BufferLength { expected: cols, actual: ragged });
        }
        let (shape, len) = sized_shape(rows.len(), cols, GRAY_CHANNELS)?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        return Ok(Self { shape, data });
    }

    pub fn rows(&self) -> usize {
        return self.shape.rows;
    }

    pub fn cols(&self) -> usize {
        return self.shape.cols;
    }

    pub fn channels(&self) -> usize {
        return self.shape.channels;
    }

    pub fn shape(&self) -> Shape {
        return self.shape;
    }

    pub fn is_empty(&self) -> bool {
        return self.shape.is_empty();
    }

    /// Number of pixels.
    pub fn total(&self) -> usize {
        return self.shape.total();
    }

    /// Number of samples, which is also the size in bytes.
    pub fn len(&self) -> usize {
        return self.data.len();
    }

    pub fn samples(&self) -> &[u8] {
        return &self.data;
    }

    pub fn into_samples(self) -> Vec<u8> {
        return self.data;
    }

    /// Row-major offset of one sample, `None` when out of bounds.
    pub fn index_of(&self, row: usize, col: usize, channel: usize) -> Option<usize> {
        if row >= self.shape.rows || col >= self.shape.cols || channel >= self.shape.channels {
            return None;
        }
        return Some((row * self.shape.cols + col) * self.shape.channels + channel);
    }

    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        return self.index_of(row, col, channel).map(|i| self.data[i]);
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        let start = self.index_of(row, col, 0)?;
        return Some(&self.data[start..start + self.shape.channels]);
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.shape.rows {
            return None;
        }
        let stride = self.shape.cols * self.shape.channels;
        return Some(&self.data[row * stride..(row + 1) * stride]);
    }

    /// Iterates pixels in row-major order, each as a `channels`-long slice.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        return self.data.chunks_exact(self.shape.channels);
    }

    pub fn info(&self) -> BufferInfo {
        return BufferInfo { shape: self.shape, total: self.total(), bytes: self.len() };
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<u8>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        return Self { shape, data };
    }

    /// Same shape, each sample passed through `f`.
    pub(crate) fn map_samples<F: FnMut(u8) -> u8>(&self, f: F) -> Self {
        return Self::from_parts(self.shape, self.data.iter().copied().map(f).collect());
    }

    /// Same shape, samples of `self` and `other` combined pairwise. Shapes must match.
    pub(crate) fn zip_samples<F: FnMut(u8, u8) -> u8>(&self, other: &Self, mut f: F) -> Self {
        let data = self.data.iter().zip(other.data.iter()).map(|(&a, &b)| f(a, b)).collect();
        return Self::from_parts(self.shape, data);
    }

    pub(crate) fn require_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            debug!("rejecting empty buffer {}", self.shape);
            return Err(Error::EmptyInput);
        }
        return Ok(());
    }

    pub(crate) fn require_channels(&self, channels: usize) -> Result<()> {
        if self.shape.channels != channels {
            debug!("expected {} channel(s), buffer is {}", channels, self.shape);
            return Err(Error::InvalidChannelCount {
                expected: channel_count_name(channels),
                actual: self.shape.channels,
            });
        }
        return Ok(());
    }

    pub(crate) fn require_compatible(&self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            debug!("incompatible buffers {} and {}", self.shape, other.shape);
            return Err(Error::ShapeMismatch { expected: self.shape, actual: other.shape });
        }
        return Ok(());
    }
}

fn channel_count_name(channels: usize) -> &'static str {
    return match channels {
        GRAY_CHANNELS => "1",
        COLOR_CHANNELS => "3",
        _ => "1 or 3",
    };
}

fn check_channel_count(channels: usize) -> Result<usize> {
    if channels != GRAY_CHANNELS && channels != COLOR_CHANNELS {
        debug!("unsupported channel count {}", channels);
        return Err(Error::InvalidChannelCount { expected: "1 or 3", actual: channels });
    }
    return Ok(channels);
}

/// Validated shape together with its sample count.
fn sized_shape(rows: usize, cols: usize, channels: usize) -> Result<(Shape, usize)> {
    let shape = Shape::new(rows, cols, check_channel_count(channels)?);
    let len = shape.checked_len().ok_or_else(|| {
        debug!("{} samples overflow usize", shape);
        Error::InvalidParameter {
            name: "shape",
            reason: format!("{} samples do not fit into usize", shape),
        }
    })?;
    return Ok((shape, len));
}

/// Summary of a buffer's geometry and memory footprint.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BufferInfo {
    pub shape: Shape,
    pub total: usize,
    pub bytes: usize,
}

impl fmt::Display for BufferInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dimensions (rows x cols): {} x {}", self.shape.rows, self.shape.cols)?;
        writeln!(f, "channels: {}", self.shape.channels)?;
        writeln!(f, "total elements: {}", self.total)?;
        writeln!(f, "size: {} bytes", self.bytes)?;
        return write!(f, "depth: 8-bit unsigned");
    }
}
