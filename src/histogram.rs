//! Intensity histograms: counting, summary statistics and bar-chart rendering.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::image_arithmetic::{
    mean, Channel, PixelBuffer, Shape, COLOR_CHANNELS, GRAY_CHANNELS, SAMPLE_MAX,
};

/// One bin per 8-bit intensity level.
pub const BINS: usize = 256;
pub const DEFAULT_NORMALIZE_CAP: f64 = 255.0;
pub const WHITE: [u8; 3] = [SAMPLE_MAX, SAMPLE_MAX, SAMPLE_MAX];

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Histogram {
    counts: [u64; BINS],
}

impl Histogram {
    pub const fn from_counts(counts: [u64; BINS]) -> Self {
        return Self { counts };
    }

    pub fn counts(&self) -> &[u64] {
        return &self.counts;
    }

    pub fn count(&self, level: u8) -> u64 {
        return self.counts[usize::from(level)];
    }

    /// Sum of all bins, equal to the number of samples counted.
    pub fn total(&self) -> u64 {
        return self.counts.iter().sum();
    }

    fn accumulate<'a>(samples: impl Iterator<Item = &'a u8>) -> Self {
        let mut counts = [0u64; BINS];
        for &sample in samples {
            counts[usize::from(sample)] += 1;
        }
        return Self { counts };
    }
}

impl Default for Histogram {
    fn default() -> Self {
        return Self::from_counts([0; BINS]);
    }
}

impl AsRef<[u64]> for Histogram {
    fn as_ref(&self) -> &[u64] {
        return &self.counts;
    }
}

/// Per-channel histograms in BGR order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct ColorHistogram {
    pub blue: Histogram,
    pub green: Histogram,
    pub red: Histogram,
}

impl ColorHistogram {
    pub fn channel(&self, channel: Channel) -> &Histogram {
        return match channel {
            Channel::Blue => &self.blue,
            Channel::Green => &self.green,
            Channel::Red => &self.red,
        };
    }

    /// Largest count over all three channels.
    pub fn max_count(&self) -> u64 {
        return Channel::ALL.iter().map(|&c| max_count(self.channel(c).counts())).max().unwrap_or(0);
    }
}

/// Statistics of the bin counts, not of the intensities.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct HistogramStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
}

/// Height and width of a rendered histogram canvas.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct CanvasSize {
    pub height: usize,
    pub width: usize,
}

impl CanvasSize {
    pub const fn new(height: usize, width: usize) -> Self {
        return Self { height, width };
    }

    /// Horizontal distance between neighbouring bars; 0 when narrower than [`BINS`].
    pub const fn bin_width(self) -> usize {
        return self.width / BINS;
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        return Self::new(400, 512);
    }
}

pub fn compute_gray(img: &PixelBuffer) -> Result<Histogram> {
    img.require_non_empty()?;
    img.require_channels(GRAY_CHANNELS)?;
    trace!("gray histogram of {}", img.shape());
    return Ok(Histogram::accumulate(img.samples().iter()));
}

pub fn compute_color(img: &PixelBuffer) -> Result<ColorHistogram> {
    img.require_non_empty()?;
    img.require_channels(COLOR_CHANNELS)?;
    trace!("color histogram of {}", img.shape());
    let mut counts = [[0u64; BINS]; COLOR_CHANNELS];
    for pixel in img.pixels() {
        for (channel, &sample) in pixel.iter().enumerate() {
            counts[channel][usize::from(sample)] += 1;
        }
    }
    let [blue, green, red] = counts.map(Histogram::from_counts);
    return Ok(ColorHistogram { blue, green, red });
}

pub fn compute_channel(img: &PixelBuffer, channel: Channel) -> Result<Histogram> {
    img.require_non_empty()?;
    img.require_channels(COLOR_CHANNELS)?;
    trace!("{} histogram of {}", channel, img.shape());
    let samples = img.pixels().map(|pixel| &pixel[channel.index()]);
    return Ok(Histogram::accumulate(samples));
}

/// [`compute_channel`] with a raw channel index (0 blue, 1 green, 2 red).
pub fn compute_channel_at(img: &PixelBuffer, index: usize) -> Result<Histogram> {
    return compute_channel(img, Channel::try_from(index)?);
}

pub fn max_count(counts: &[u64]) -> u64 {
    return counts.iter().copied().max().unwrap_or(0);
}

pub fn stats(counts: &[u64]) -> HistogramStats {
    if counts.is_empty() {
        return HistogramStats::default();
    }
    return HistogramStats {
        min: counts.iter().copied().min().unwrap_or(0),
        max: max_count(counts),
        mean: mean(counts),
    };
}

/// Rescales counts linearly so the largest becomes `cap`. All-zero input stays zero.
pub fn normalize(counts: &[u64], cap: f64) -> Vec<f64> {
    let max = max_count(counts);
    if max == 0 {
        return vec![0.0; counts.len()];
    }
    let max = max as f64;
    return counts.iter().map(|&count| count as f64 / max * cap).collect();
}

/// Black BGR canvas the bars are drawn onto.
struct Canvas {
    size: CanvasSize,
    data: Vec<u8>,
}

impl Canvas {
    fn blank(size: CanvasSize) -> Result<Self> {
        let len = check_canvas(size)?;
        return Ok(Self { size, data: vec![0; len] });
    }

    /// Vertical bar in column `x` rising `height` rows from the bottom edge.
    fn draw_bar(&mut self, x: usize, height: usize, color: [u8; 3]) {
        if x >= self.size.width {
            return;
        }
        let top = self.size.height.saturating_sub(height);
        for y in top..self.size.height {
            let start = (y * self.size.width + x) * COLOR_CHANNELS;
            self.data[start..start + COLOR_CHANNELS].copy_from_slice(&color);
        }
    }

    fn into_buffer(self) -> PixelBuffer {
        let shape = Shape::new(self.size.height, self.size.width, COLOR_CHANNELS);
        return PixelBuffer::from_parts(shape, self.data);
    }
}

/// Number of samples a canvas of `size` holds.
fn check_canvas(size: CanvasSize) -> Result<usize> {
    let shape = Shape::new(size.height, size.width, COLOR_CHANNELS);
    if shape.is_empty() {
        debug!("rejecting {}x{} histogram canvas", size.height, size.width);
        return Err(Error::InvalidParameter {
            name: "size",
            reason: format!("canvas must be non-empty, got {}x{}", size.height, size.width),
        });
    }
    return shape.checked_len().ok_or_else(|| {
        debug!("{}x{} histogram canvas overflows usize", size.height, size.width);
        Error::InvalidParameter {
            name: "size",
            reason: format!("{}x{} canvas does not fit into usize", size.height, size.width),
        }
    });
}

fn bar_height(count: u64, max: u64, canvas_height: usize) -> usize {
    return (count as f64 / max as f64 * canvas_height as f64) as usize;
}

/// Draws one bar per bin, scaled so the largest count spans the full canvas height.
pub fn visualize(counts: &[u64], size: CanvasSize, color: [u8; 3]) -> Result<PixelBuffer> {
    if counts.len() != BINS {
        debug!("histogram with {} bins cannot be drawn", counts.len());
        return Err(Error::InvalidParameter {
            name: "histogram",
            reason: format!("expected {} bins, got {}", BINS, counts.len()),
        });
    }
    let mut canvas = Canvas::blank(size)?;
    let max = max_count(counts);
    if max == 0 {
        return Ok(canvas.into_buffer());
    }
    for (bin, &count) in counts.iter().enumerate() {
        canvas.draw_bar(bin * size.bin_width(), bar_height(count, max, size.height), color);
    }
    return Ok(canvas.into_buffer());
}

/// Gray histogram of `img` drawn in white.
pub fn visualize_gray(img: &PixelBuffer, size: CanvasSize) -> Result<PixelBuffer> {
    let histogram = compute_gray(img)?;
    return visualize(histogram.counts(), size, WHITE);
}

/// Blue, green and red histograms overlaid on one shared scale.
pub fn visualize_color(img: &PixelBuffer, size: CanvasSize) -> Result<PixelBuffer> {
    let histogram = compute_color(img)?;
    let mut canvas = Canvas::blank(size)?;
    let max = histogram.max_count();
    if max == 0 {
        return Ok(canvas.into_buffer());
    }
    for bin in 0..BINS {
        for channel in Channel::ALL {
            let count = histogram.channel(channel).counts()[bin];
            canvas.draw_bar(
                bin * size.bin_width(),
                bar_height(count, max, size.height),
                channel.color(),
            );
        }
    }
    return Ok(canvas.into_buffer());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_column(canvas: &PixelBuffer, x: usize) -> Vec<[u8; 3]> {
        (0..canvas.rows())
            .map(|y| {
                let pixel = canvas.pixel(y, x).unwrap();
                [pixel[0], pixel[1], pixel[2]]
            })
            .collect()
    }

    #[test]
    fn gray_counts_sum_to_pixel_count() {
        let img = PixelBuffer::gray_from_rows(&[[10, 200, 10], [0, 255, 10]]).unwrap();
        let histogram = compute_gray(&img).unwrap();
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.count(10), 3);
        assert_eq!(histogram.count(255), 1);
        assert_eq!(histogram.count(11), 0);
    }

    #[test]
    fn color_counts_per_channel() {
        let img = PixelBuffer::new(1, 2, 3, vec![1, 2, 3, 1, 5, 6]).unwrap();
        let histogram = compute_color(&img).unwrap();
        assert_eq!(histogram.blue.count(1), 2);
        assert_eq!(histogram.green.count(2), 1);
        assert_eq!(histogram.red.count(6), 1);
        let green = compute_channel(&img, Channel::Green).unwrap();
        assert_eq!(histogram.channel(Channel::Green), &green);
        assert_eq!(histogram.max_count(), 2);
    }

    #[test]
    fn channel_count_and_index_checks() {
        let gray = PixelBuffer::zeros(2, 2, 1).unwrap();
        let color = PixelBuffer::zeros(2, 2, 3).unwrap();
        assert!(matches!(compute_color(&gray), Err(Error::InvalidChannelCount { .. })));
        assert!(matches!(compute_gray(&color), Err(Error::InvalidChannelCount { .. })));
        assert_eq!(compute_channel_at(&color, 3), Err(Error::InvalidChannelIndex(3)));
        assert_eq!(compute_channel_at(&color, 2).unwrap().count(0), 4);
        assert_eq!(
            compute_channel(&gray, Channel::Red),
            Err(Error::InvalidChannelCount { expected: "3", actual: 1 })
        );
        assert!(matches!(compute_channel_at(&gray, 0), Err(Error::InvalidChannelCount { .. })));
    }

    #[test]
    fn stats_of_uniform_histogram() {
        let result = stats(&[5; BINS]);
        assert_eq!(result, HistogramStats { min: 5, max: 5, mean: 5.0 });
    }

    #[test]
    fn stats_of_empty_histogram() {
        assert_eq!(stats(&[]), HistogramStats { min: 0, max: 0, mean: 0.0 });
    }

    #[test]
    fn stats_describe_counts() {
        let mut counts = [0u64; BINS];
        counts[3] = 256;
        counts[7] = 512;
        let result = stats(&counts);
        assert_eq!((result.min, result.max), (0, 512));
        assert_eq!(result.mean, 3.0);
    }

    #[test]
    fn normalize_scales_to_cap() {
        assert_eq!(normalize(&[0, 2, 4], DEFAULT_NORMALIZE_CAP), vec![0.0, 127.5, 255.0]);
        assert_eq!(normalize(&[1, 4], 100.0), vec![25.0, 100.0]);
        assert_eq!(normalize(&[0, 0, 0], 255.0), vec![0.0; 3]);
    }

    #[test]
    fn bars_scale_to_largest_bin() {
        let mut counts = [0u64; BINS];
        counts[0] = 10;
        counts[255] = 5;
        let canvas = visualize(&counts, CanvasSize::new(100, 512), WHITE).unwrap();
        assert_eq!(canvas.shape(), Shape::new(100, 512, 3));
        assert!(bar_column(&canvas, 0).iter().all(|&p| p == WHITE));
        let half = bar_column(&canvas, 510);
        assert_eq!(half[49], [0, 0, 0]);
        assert!(half[50..].iter().all(|&p| p == WHITE));
        assert!(bar_column(&canvas, 1).iter().all(|&p| p == [0, 0, 0]));
    }

    #[test]
    fn empty_histogram_draws_blank_canvas() {
        let canvas = visualize(&[0; BINS], CanvasSize::default(), WHITE).unwrap();
        assert_eq!(canvas.shape(), Shape::new(400, 512, 3));
        assert!(canvas.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn visualize_requires_256_bins() {
        assert!(matches!(
            visualize(&[1; 10], CanvasSize::default(), WHITE),
            Err(Error::InvalidParameter { name: "histogram", .. })
        ));
        assert!(matches!(
            visualize(&[1; BINS], CanvasSize::new(0, 512), WHITE),
            Err(Error::InvalidParameter { name: "size", .. })
        ));
    }

    #[test]
    fn overflowing_canvas_is_rejected() {
        let size = CanvasSize::new(usize::MAX, 2);
        assert!(matches!(
            visualize(&[1; BINS], size, WHITE),
            Err(Error::InvalidParameter { name: "size", .. })
        ));
        let img = PixelBuffer::filled(2, 2, 3, 9).unwrap();
        assert!(matches!(
            visualize_color(&img, size),
            Err(Error::InvalidParameter { name: "size", .. })
        ));
    }

    #[test]
    fn gray_visualization_is_white() {
        let img = PixelBuffer::filled(4, 4, 1, 128).unwrap();
        let canvas = visualize_gray(&img, CanvasSize::new(10, 256)).unwrap();
        assert!(bar_column(&canvas, 128).iter().all(|&p| p == WHITE));
        assert!(bar_column(&canvas, 127).iter().all(|&p| p == [0, 0, 0]));
    }

    #[test]
    fn color_visualization_shares_one_scale() {
        // blue: 4 samples at 0; green: 2 at 1 and 2 at 2; red: 4 at 3
        let img = PixelBuffer::new(1, 4, 3, vec![0, 1, 3, 0, 1, 3, 0, 2, 3, 0, 2, 3]).unwrap();
        let canvas = visualize_color(&img, CanvasSize::new(8, 512)).unwrap();
        let blue = bar_column(&canvas, 0);
        assert!(blue.iter().all(|&p| p == Channel::Blue.color()));
        let green = bar_column(&canvas, 2);
        assert_eq!(green[3], [0, 0, 0]);
        assert!(green[4..].iter().all(|&p| p == Channel::Green.color()));
        let red = bar_column(&canvas, 6);
        assert!(red.iter().all(|&p| p == Channel::Red.color()));
    }
}
