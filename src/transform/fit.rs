use crate::foundation::core::{Rect, Size};

/// Aspect-preserving "contain" mapping of an intrinsic size into a
/// destination box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitResult {
    /// Sub-rectangle of the destination the source maps onto, centered on
    /// whichever axis is not fully filled.
    pub draw_rect: Rect,
    /// Uniform scale factor from intrinsic pixels to drawn pixels.
    pub scale: f64,
}

impl FitResult {
    /// Zero-area result returned for degenerate inputs; callers skip drawing.
    pub fn empty() -> Self {
        Self {
            draw_rect: Rect::ZERO,
            scale: 0.0,
        }
    }

    /// `true` when the draw rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.draw_rect.width() <= 0.0 || self.draw_rect.height() <= 0.0
    }
}

/// Compute the "contain" fit of `intrinsic` into `destination`.
///
/// The entire source stays visible, letterboxed on exactly one axis (or
/// neither when the aspect ratios match). Either size having a non-positive
/// or non-finite axis yields [`FitResult::empty`].
pub fn fit(intrinsic: Size, destination: Size) -> FitResult {
    if !positive_finite(intrinsic) || !positive_finite(destination) {
        return FitResult::empty();
    }

    let source_aspect = intrinsic.width / intrinsic.height;
    let destination_aspect = destination.width / destination.height;

    if source_aspect > destination_aspect {
        // Source relatively wider: fill the destination width, center
        // vertically.
        let height = destination.width / source_aspect;
        let y = (destination.height - height) / 2.0;
        FitResult {
            draw_rect: Rect::new(0.0, y, destination.width, y + height),
            scale: destination.width / intrinsic.width,
        }
    } else {
        // Source relatively taller or equal: fill the destination height,
        // center horizontally.
        let width = destination.height * source_aspect;
        let x = (destination.width - width) / 2.0;
        FitResult {
            draw_rect: Rect::new(x, 0.0, x + width, destination.height),
            scale: destination.height / intrinsic.height,
        }
    }
}

fn positive_finite(size: Size) -> bool {
    size.width.is_finite() && size.width > 0.0 && size.height.is_finite() && size.height > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/transform/fit.rs"]
mod tests;
