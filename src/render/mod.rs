//! CPU raster rendering: the composited surface, premultiplied blending, and
//! the per-tick compositor.

/// Premultiplied `over` blending and the shared scaled-blit routine.
pub mod composite;
/// The per-tick compositor that owns the surface.
pub mod compositor;
/// The mutable RGBA8 surface the compositor draws into.
pub mod surface;
