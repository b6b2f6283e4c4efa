use crate::foundation::core::{Size, SurfaceDims};

/// The mutable RGBA8 pixel buffer the compositor draws into.
///
/// Pixels are premultiplied RGBA8, tightly packed, row-major. The surface is
/// created once and resized in place as the destination rectangle's measured
/// size changes; capture only reads it and never reallocates it. Exclusive
/// mutation belongs to the [`crate::render::compositor::Compositor`].
#[derive(Clone, Debug, Default)]
pub struct Surface {
    dims: SurfaceDims,
    data: Vec<u8>,
}

impl Surface {
    /// Create an empty, zero-sized surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pixel dimensions.
    pub fn dims(&self) -> SurfaceDims {
        self.dims
    }

    /// Current dimensions as a floating-point [`Size`].
    pub fn size(&self) -> Size {
        self.dims.as_size()
    }

    /// `true` while the surface has no pixels (not yet sized, or sized to a
    /// zero-area destination).
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Borrow the pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        let idx = (y as usize * self.dims.width as usize + x as usize) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Resize in place to `dims`.
    ///
    /// A size change leaves the buffer fully cleared; stale pixels never
    /// survive a reallocation. An unchanged size is a no-op; callers that
    /// need a blank surface every tick issue [`Surface::clear`] separately.
    pub fn resize(&mut self, dims: SurfaceDims) {
        if dims == self.dims {
            return;
        }
        self.dims = dims;
        self.data.clear();
        self.data.resize(dims.byte_len(), 0);
    }

    /// Overwrite every pixel with transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Borrow one pixel row; `y` must be within the surface.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let stride = self.dims.width as usize * 4;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
