//! Frame source seam.
//!
//! Stream acquisition (device permissions, track lifecycle, decode) lives with
//! the embedder; the engine only consumes a [`provider::FrameSource`] handle
//! and re-checks its readiness on every tick.

/// Decoded source frame representation.
pub mod frame;
/// The `FrameSource` trait and the built-in in-memory implementation.
pub mod provider;
