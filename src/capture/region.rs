use crate::capture::encode::encode_jpeg_data_url;
use crate::foundation::core::{Rect, Size, SurfaceDims};
use crate::foundation::error::{GridlensError, GridlensResult};
use crate::render::composite::blit_scaled_over;
use crate::render::surface::Surface;
use crate::source::provider::FrameSource;
use crate::transform::space::display_to_intrinsic;

/// Extract `rect` from the composited surface and encode it as a JPEG data
/// URL.
///
/// `rect` is expressed in the surface's own pixel coordinates. This is a pure
/// crop: the output raster is sized to the rectangle (rounded to whole
/// pixels) and pixel `(i, j)` of the result equals surface pixel
/// `(x + i, y + j)`. Parts of the rectangle reaching past the surface stay
/// transparent.
///
/// Returns `None` instead of failing when the surface has no pixels yet, the
/// region has no area, or encoding fails; the cause is logged.
pub fn capture_surface_region(surface: &Surface, rect: Rect) -> Option<String> {
    match capture_surface_region_inner(surface, rect) {
        Ok(encoded) => Some(encoded),
        Err(err) => {
            tracing::warn!(%err, "surface region capture failed");
            None
        }
    }
}

/// Capture a display-space rectangle directly against a live source frame.
///
/// `display_rect` is expressed against the frame's displayed on-screen size
/// (`display_size`), which generally differs from the intrinsic resolution.
/// The rectangle is mapped into intrinsic pixels with independent horizontal
/// and vertical scale factors, then the mapped region is scale-cropped into a
/// raster sized to the display rectangle.
///
/// Same failure contract as [`capture_surface_region`]: `None`, never a
/// panic or error.
pub fn capture_display_region(
    source: &dyn FrameSource,
    display_rect: Rect,
    display_size: Size,
) -> Option<String> {
    match capture_display_region_inner(source, display_rect, display_size) {
        Ok(encoded) => Some(encoded),
        Err(err) => {
            tracing::warn!(%err, "display region capture failed");
            None
        }
    }
}

fn capture_surface_region_inner(surface: &Surface, rect: Rect) -> GridlensResult<String> {
    if surface.is_empty() {
        return Err(GridlensError::capture("surface has no pixels to capture yet"));
    }

    let out = raster_dims(rect)?;
    let data = crop_surface(surface, rect, out);
    encode_jpeg_data_url(out, &data)
}

/// Row-wise pure crop: output pixel `(i, j)` equals surface pixel
/// `(x + i, y + j)`; rows or columns past the surface stay transparent.
fn crop_surface(surface: &Surface, rect: Rect, out: SurfaceDims) -> Vec<u8> {
    let x0 = rect.x0.round() as i64;
    let y0 = rect.y0.round() as i64;

    let dims = surface.dims();
    let mut data = vec![0u8; out.byte_len()];
    let out_stride = out.width as usize * 4;

    for j in 0..out.height {
        let sy = y0 + i64::from(j);
        if sy < 0 || sy >= i64::from(dims.height) {
            continue;
        }

        let first_col = x0.max(0);
        let last_col = (x0 + i64::from(out.width)).min(i64::from(dims.width));
        if first_col >= last_col {
            continue;
        }

        let src_row = surface.row(sy as u32);
        let src_start = first_col as usize * 4;
        let src_end = last_col as usize * 4;
        let dst_start = j as usize * out_stride + (first_col - x0) as usize * 4;
        data[dst_start..dst_start + (src_end - src_start)]
            .copy_from_slice(&src_row[src_start..src_end]);
    }

    data
}

fn capture_display_region_inner(
    source: &dyn FrameSource,
    display_rect: Rect,
    display_size: Size,
) -> GridlensResult<String> {
    let out = raster_dims(display_rect)?;

    if !source.is_ready() {
        return Err(GridlensError::source("frame source is not ready"));
    }
    let frame = source
        .current_frame()
        .ok_or_else(|| GridlensError::source("frame source has no current frame"))?;

    let source_rect = display_to_intrinsic(display_rect, display_size, frame.intrinsic_size())?;
    let mut data = vec![0u8; out.byte_len()];
    blit_scaled_over(
        &mut data,
        out,
        frame,
        source_rect,
        Rect::new(0.0, 0.0, f64::from(out.width), f64::from(out.height)),
        1.0,
    );

    encode_jpeg_data_url(out, &data)
}

/// Output raster dimensions for a capture rectangle, rounded to whole pixels.
fn raster_dims(rect: Rect) -> GridlensResult<SurfaceDims> {
    let (width, height) = (rect.width(), rect.height());
    if !(width > 0.0 && height > 0.0) {
        return Err(GridlensError::capture(
            "capture region must have positive width and height",
        ));
    }
    let dims = SurfaceDims::from_size(Size::new(width, height));
    if dims.is_empty() {
        return Err(GridlensError::capture(
            "capture region rounds to zero pixels",
        ));
    }
    Ok(dims)
}

#[cfg(test)]
#[path = "../../tests/unit/capture/region.rs"]
mod tests;
