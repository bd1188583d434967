use image_algebra::PixelBuffer;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Buffer of the given shape filled with uniformly random samples.
pub fn random_buffer<R: Rng>(
    rng: &mut R, rows: usize, cols: usize, channels: usize,
) -> PixelBuffer {
    let mut data = vec![0u8; rows * cols * channels];
    rng.fill(data.as_mut_slice());
    PixelBuffer::new(rows, cols, channels, data).expect("valid synthetic shape")
}

/// Random shape with 1 or 3 channels and up to 16 x 16 pixels.
pub fn random_shape<R: Rng>(rng: &mut R) -> (usize, usize, usize) {
    let channels = if rng.gen_bool(0.5) { 1 } else { 3 };
    (rng.gen_range(1..=16), rng.gen_range(1..=16), channels)
}

/// Horizontal gradient from 0 on the left to 255 on the right, BGR channels offset.
pub fn gradient_bgr(rows: usize, cols: usize) -> PixelBuffer {
    PixelBuffer::from_fn(rows, cols, 3, |_, col, channel| {
        let base = col * 255 / cols.saturating_sub(1).max(1);
        (base + channel * 40).min(255) as u8
    })
    .expect("valid gradient shape")
}
