use crate::foundation::core::Size;
use crate::foundation::error::{GridlensError, GridlensResult};

/// A decoded source frame as premultiplied RGBA8 pixels.
///
/// Frames are tightly packed, row-major. Live camera frames are fully opaque,
/// which makes premultiplied and straight alpha identical; the premultiplied
/// convention matters once a producer hands over partially transparent pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFrame {
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes (`width * height * 4`).
    pub data: Vec<u8>,
}

impl SourceFrame {
    /// Construct a validated frame.
    ///
    /// Fails when the pixel buffer length is not exactly `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> GridlensResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| GridlensError::source("frame dimensions overflow"))?;
        if data.len() != expected {
            return Err(GridlensError::source(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height} rgba8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Construct a single-color frame.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> GridlensResult<Self> {
        let px = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| GridlensError::source("frame dimensions overflow"))?;
        let mut data = Vec::with_capacity(px.saturating_mul(4));
        for _ in 0..px {
            data.extend_from_slice(&rgba);
        }
        Self::new(width, height, data)
    }

    /// Intrinsic size as a floating-point [`Size`].
    pub fn intrinsic_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Read one pixel; clamped to the frame bounds.
    ///
    /// Zero-dimension frames have no pixels to clamp onto and read as
    /// transparent black.
    pub(crate) fn pixel_clamped(&self, x: i64, y: i64) -> [u8; 4] {
        if self.width == 0 || self.height == 0 {
            return [0, 0, 0, 0];
        }
        let x = x.clamp(0, i64::from(self.width) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height) - 1) as usize;
        let idx = (y * self.width as usize + x) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/frame.rs"]
mod tests;
