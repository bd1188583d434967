//! # image_algebra
//!
//! Pixel-level image algebra on 8-bit buffers: grayscale conversion, saturating
//! arithmetic, thresholding, channel isolation and histograms.
//!
//! Buffers hold one gray channel or three interleaved channels in BGR order.
//! Every operation validates its input, allocates a new buffer and leaves its
//! arguments untouched, so independent calls can run on any thread.
//!
//! ```
//! use image_algebra::{arithmetic, channels, threshold, PixelBuffer};
//!
//! # fn main() -> image_algebra::Result<()> {
//! let img = PixelBuffer::gray_from_rows(&[[10, 200], [0, 255]])?;
//! let brighter = arithmetic::add_scalar(&img, 50.0)?;
//! assert_eq!(brighter.samples(), &[60, 250, 50, 255]);
//!
//! let mask = threshold::binary(&img, 100, 255)?;
//! assert_eq!(channels::invert(&mask)?.samples(), &[255, 0, 255, 0]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image_arithmetic;

pub mod arithmetic;
pub mod channels;
pub mod grayscale;
pub mod histogram;
pub mod threshold;

pub use crate::error::{Error, Result};
pub use crate::grayscale::GrayScale;
pub use crate::histogram::{CanvasSize, ColorHistogram, Histogram, HistogramStats};
pub use crate::image_arithmetic::{ArithmeticImage, BufferInfo, Channel, PixelBuffer, Shape};
pub use crate::threshold::{ThresholdMode, ThresholdParams};
