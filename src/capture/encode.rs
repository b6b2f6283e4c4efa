use base64::Engine as _;

use crate::foundation::core::SurfaceDims;
use crate::foundation::error::{GridlensError, GridlensResult};

/// Fixed encode quality so identical pixel input always produces identical
/// output bytes.
const JPEG_QUALITY: u8 = 90;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode a premultiplied RGBA8 raster as a self-contained
/// `data:image/jpeg;base64,` string.
///
/// JPEG carries no alpha channel. The input is premultiplied, so dropping the
/// alpha byte flattens transparency onto black.
pub fn encode_jpeg_data_url(dims: SurfaceDims, rgba: &[u8]) -> GridlensResult<String> {
    if dims.is_empty() {
        return Err(GridlensError::capture("cannot encode a zero-size raster"));
    }
    if rgba.len() != dims.byte_len() {
        return Err(GridlensError::capture(format!(
            "raster buffer is {} bytes, expected {} for {}x{}",
            rgba.len(),
            dims.byte_len(),
            dims.width,
            dims.height
        )));
    }

    let mut rgb = Vec::with_capacity(dims.width as usize * dims.height as usize * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }

    let img: image::RgbImage = image::ImageBuffer::from_raw(dims.width, dims.height, rgb)
        .ok_or_else(|| GridlensError::capture("raster buffer does not match dimensions"))?;

    let mut jpeg = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode_image(&img)
        .map_err(|e| GridlensError::capture(format!("jpeg encode failed: {e}")))?;

    let mut out = String::from(DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(&jpeg, &mut out);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/capture/encode.rs"]
mod tests;
