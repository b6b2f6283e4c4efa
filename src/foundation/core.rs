pub use kurbo::{Point, Rect, Size, Vec2};

/// Integer pixel dimensions of a raster buffer.
///
/// Measured on-screen sizes are fractional ([`Size`]); a pixel buffer is not.
/// `from_size` is the single place where that rounding happens.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceDims {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceDims {
    /// Create pixel dimensions directly.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Round a measured size to whole pixels; negative or non-finite axes
    /// collapse to zero.
    pub fn from_size(size: Size) -> Self {
        fn axis(v: f64) -> u32 {
            if !v.is_finite() || v <= 0.0 {
                return 0;
            }
            v.round().min(f64::from(u32::MAX)) as u32
        }

        Self {
            width: axis(size.width),
            height: axis(size.height),
        }
    }

    /// Convert back to a floating-point size.
    pub fn as_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Return `true` when either axis is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA8 byte length of a buffer with these dimensions.
    pub(crate) fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// One captured grid cell, handed to the capture consumer.
///
/// `encoded_data` is `None` exactly when extraction failed (absent surface,
/// zero-size region, or encoder failure); the label is always present so the
/// consumer can still render a failure state for the clicked cell.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapturedImage {
    /// Human-readable 1-based cell label, e.g. `"Row 3, Column 6"`.
    pub cell_label: String,
    /// JPEG data URL of the captured pixels, or `None` on failure.
    pub encoded_data: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
