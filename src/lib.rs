//! Gridlens composites a live video stream onto a CPU raster surface and
//! captures grid-aligned regions of the result as JPEG data URLs.
//!
//! The pipeline is deliberately small and runs entirely on one thread:
//!
//! 1. **Observe**: a [`FrameSource`] exposes the current frame and a readiness
//!    signal, re-checked on every tick
//! 2. **Composite**: the [`Compositor`] resizes and clears its [`Surface`],
//!    then draws the frame with aspect-preserving "contain" scaling at a
//!    uniform opacity
//! 3. **Partition**: a [`GridIndex`] maps `(row, col)` cells onto the
//!    surface's *current* size, never a cached one
//! 4. **Capture**: region capture crops the surface (or maps a display-space
//!    rectangle straight onto the source frame) and encodes the crop as a
//!    self-contained `data:image/jpeg;base64,` string
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8** end-to-end: frames and surfaces share one pixel
//!   representation.
//! - **No failure crosses the tick boundary**: a failed capture is `None`,
//!   never a panic or an error that would stall the preview loop.
//! - **Single-threaded cooperative scheduling**: the embedder drives
//!   [`PreviewSession::tick`] from its display-refresh callback; capture and
//!   tick interleave deterministically because they share that thread.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Region capture and JPEG data-URL encoding.
pub mod capture;
/// Grid partitioning of the composited surface.
pub mod grid;
/// Surface, compositing math, and the per-tick compositor.
pub mod render;
/// Session lifecycle: options, liveness, and click-to-capture glue.
pub mod session;
/// Frame source seam between the engine and stream acquisition glue.
pub mod source;
/// Pure coordinate-space transforms.
pub mod transform;

pub use crate::foundation::core::{CapturedImage, Point, Rect, Size, SurfaceDims, Vec2};
pub use crate::foundation::error::{GridlensError, GridlensResult};

pub use crate::capture::encode::encode_jpeg_data_url;
pub use crate::capture::region::{capture_display_region, capture_surface_region};
pub use crate::grid::index::GridIndex;
pub use crate::render::compositor::Compositor;
pub use crate::render::surface::Surface;
pub use crate::session::preview_session::{
    PreviewOpts, PreviewSession, StopHandle, TickOutcome,
};
pub use crate::source::frame::SourceFrame;
pub use crate::source::provider::{FrameSource, StaticFrameSource};
pub use crate::transform::fit::{FitResult, fit};
pub use crate::transform::space::display_to_intrinsic;
