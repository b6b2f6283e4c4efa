use crate::foundation::core::{Rect, SurfaceDims};
use crate::foundation::math::mul_div255_u8;
use crate::source::frame::SourceFrame;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over blend of premultiplied pixels with a uniform extra opacity.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Draw `src_rect` of `frame`, scaled into `dst_rect` of the destination
/// buffer, blending each pixel with [`over`] at `opacity`.
///
/// Sampling is nearest-neighbor with pixel-center mapping. Destination pixels
/// whose mapped source position falls outside the frame receive nothing, and
/// the destination rectangle is clipped to the buffer bounds. Both the
/// compositor draw and the display-space capture path go through here so the
/// two cannot drift apart.
pub(crate) fn blit_scaled_over(
    dst: &mut [u8],
    dst_dims: SurfaceDims,
    frame: &SourceFrame,
    src_rect: Rect,
    dst_rect: Rect,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    if !(dst_rect.width() > 0.0 && dst_rect.height() > 0.0) {
        return;
    }
    if !(src_rect.width() > 0.0 && src_rect.height() > 0.0) {
        return;
    }
    debug_assert_eq!(dst.len(), dst_dims.byte_len());

    let scale_x = src_rect.width() / dst_rect.width();
    let scale_y = src_rect.height() / dst_rect.height();
    let stride = dst_dims.width as usize * 4;
    let columns = covered_pixels(dst_rect.x0, dst_rect.x1, dst_dims.width);

    for y in covered_pixels(dst_rect.y0, dst_rect.y1, dst_dims.height) {
        let sy = src_rect.y0 + (f64::from(y) + 0.5 - dst_rect.y0) * scale_y;
        if sy < 0.0 || sy >= f64::from(frame.height) {
            continue;
        }
        let sy = sy.floor() as i64;

        for x in columns.clone() {
            let sx = src_rect.x0 + (f64::from(x) + 0.5 - dst_rect.x0) * scale_x;
            if sx < 0.0 || sx >= f64::from(frame.width) {
                continue;
            }

            let src = frame.pixel_clamped(sx.floor() as i64, sy);
            let idx = y as usize * stride + x as usize * 4;
            let d = [dst[idx], dst[idx + 1], dst[idx + 2], dst[idx + 3]];
            let out = over(d, src, opacity);
            dst[idx..idx + 4].copy_from_slice(&out);
        }
    }
}

/// Integer pixels whose centers lie within `[lo, hi)`, clipped to `0..limit`.
fn covered_pixels(lo: f64, hi: f64, limit: u32) -> std::ops::Range<u32> {
    let end = (hi - 0.5).ceil().max(0.0).min(f64::from(limit)) as u32;
    let start = ((lo - 0.5).ceil().max(0.0) as u32).min(end);
    start..end
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
