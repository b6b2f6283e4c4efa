use crate::foundation::core::{Rect, Size, SurfaceDims};
use crate::foundation::error::{GridlensError, GridlensResult};
use crate::render::composite::blit_scaled_over;
use crate::render::surface::Surface;
use crate::source::provider::FrameSource;
use crate::transform::fit::fit;

/// Per-tick compositor that owns the [`Surface`].
///
/// Each tick re-measures nothing itself; the embedder passes the destination
/// rectangle's current measured size. The tick then performs, strictly in order:
/// resize, clear, and (only when the source is ready) a "contain"-fitted draw
/// of the full frame at the configured opacity. Repeating a tick with
/// unchanged inputs reproduces the same pixels; nothing accumulates.
#[derive(Debug)]
pub struct Compositor {
    surface: Surface,
    opacity: f32,
}

impl Compositor {
    /// Create a compositor with a validated uniform compositing opacity.
    pub fn new(opacity: f32) -> GridlensResult<Self> {
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(GridlensError::validation(
                "compositor opacity must be within [0, 1]",
            ));
        }
        Ok(Self {
            surface: Surface::new(),
            opacity,
        })
    }

    /// Current compositing opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the compositing opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Borrow the composited surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Advance one scheduling tick.
    ///
    /// `destination` is the destination rectangle's current measured size; it
    /// may change between ticks and the surface follows it. When `source` is
    /// not ready the surface is left blank for this tick; readiness is
    /// re-checked next tick, so the preview recovers on its own.
    pub fn tick(&mut self, source: &dyn FrameSource, destination: Size) {
        let dims = SurfaceDims::from_size(destination);
        if dims != self.surface.dims() {
            tracing::debug!(
                width = dims.width,
                height = dims.height,
                "surface resized to destination"
            );
        }
        self.surface.resize(dims);
        self.surface.clear();

        if self.surface.is_empty() || !source.is_ready() {
            return;
        }
        let Some(frame) = source.current_frame() else {
            return;
        };

        let fitted = fit(frame.intrinsic_size(), self.surface.size());
        if fitted.is_empty() {
            return;
        }

        let source_rect = Rect::new(
            0.0,
            0.0,
            f64::from(frame.width),
            f64::from(frame.height),
        );
        blit_scaled_over(
            self.surface.data_mut(),
            dims,
            frame,
            source_rect,
            fitted.draw_rect,
            self.opacity,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
