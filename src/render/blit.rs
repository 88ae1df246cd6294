//! Conversion of the grey framebuffer into displayable ARGB8888 bytes.
//!
//! SDL's `ARGB8888` is a packed 32-bit format, so on little-endian hosts each
//! pixel lands in memory as `B G R A`.

use crate::math::dyn_matrix::DynMatrix;

/// Bytes per output pixel.
pub const BYTES_PER_PIXEL: usize = 4;

#[inline]
fn argb_bytes(grey: u8) -> [u8; 4] {
    (0xFF00_0000u32 | (grey as u32) << 16 | (grey as u32) << 8 | grey as u32).to_le_bytes()
}

/// Replicates each grey byte into the red, green and blue channels.
///
/// # Panics
/// In debug builds, panics if `out` is not exactly four bytes per pixel.
pub fn blit_grey(img: &DynMatrix<u8>, out: &mut [u8]) {
    debug_assert_eq!(
        out.len(),
        img.as_slice().len() * BYTES_PER_PIXEL,
        "Output buffer size doesn't match frame buffer"
    );
    for (dst, &grey) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(img.as_slice()) {
        dst.copy_from_slice(&argb_bytes(grey));
    }
}

/// Renders pixels at or above `threshold` white and everything else black.
pub fn blit_threshold(img: &DynMatrix<u8>, threshold: u8, out: &mut [u8]) {
    debug_assert_eq!(
        out.len(),
        img.as_slice().len() * BYTES_PER_PIXEL,
        "Output buffer size doesn't match frame buffer"
    );
    for (dst, &grey) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(img.as_slice()) {
        let level = if grey >= threshold { u8::MAX } else { 0 };
        dst.copy_from_slice(&argb_bytes(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_is_replicated() {
        let mut img = DynMatrix::filled(1, 2, 0u8);
        img[0][1] = 0x7F;
        let mut out = vec![0u8; 8];
        blit_grey(&img, &mut out);
        assert_eq!(out, vec![0, 0, 0, 0xFF, 0x7F, 0x7F, 0x7F, 0xFF]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut img = DynMatrix::filled(1, 3, 10u8);
        img[0][1] = 128;
        img[0][2] = 127;
        let mut out = vec![0u8; 12];
        blit_threshold(&img, 128, &mut out);
        assert_eq!(&out[0..4], &[0, 0, 0, 0xFF]);
        assert_eq!(&out[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&out[8..12], &[0, 0, 0, 0xFF]);
    }
}
