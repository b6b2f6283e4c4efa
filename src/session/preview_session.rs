use std::cell::Cell;
use std::rc::Rc;

use crate::capture::region::capture_surface_region;
use crate::foundation::core::{CapturedImage, Size};
use crate::foundation::error::{GridlensError, GridlensResult};
use crate::grid::index::GridIndex;
use crate::render::compositor::Compositor;
use crate::render::surface::Surface;
use crate::source::provider::FrameSource;

/// Default compositing opacity.
pub const DEFAULT_OPACITY: f32 = 0.5;
/// Default grid row count.
pub const DEFAULT_GRID_ROWS: u32 = 5;
/// Default grid column count.
pub const DEFAULT_GRID_COLS: u32 = 11;

/// Options controlling a [`PreviewSession`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewOpts {
    /// Uniform compositing opacity in `[0, 1]`.
    pub opacity: f32,
    /// Grid row count, at least 1.
    pub rows: u32,
    /// Grid column count, at least 1.
    pub cols: u32,
}

impl Default for PreviewOpts {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
        }
    }
}

impl PreviewOpts {
    /// Validate option ranges.
    pub fn validate(&self) -> GridlensResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(GridlensError::validation(
                "opacity must be within [0, 1]",
            ));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(GridlensError::validation(
                "rows and cols must both be at least 1",
            ));
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> GridlensResult<Self> {
        let opts: Self =
            serde_json::from_str(json).map_err(|e| GridlensError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }
}

/// Outcome of one scheduling tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The compositor ran: the surface was resized, cleared, and (when the
    /// source was ready) redrawn.
    Ticked,
    /// The session is stopped; the surface was not touched.
    Stopped,
}

/// Handle that stops a running session from outside the tick callback.
///
/// Clones share one liveness cell, so a handle captured by teardown glue
/// stops the session even while a tick callback is already in flight: the
/// flag is checked at tick-top before any surface write.
#[derive(Clone, Debug)]
pub struct StopHandle {
    live: Rc<Cell<bool>>,
}

impl StopHandle {
    /// Mark the session stopped. Idempotent.
    pub fn stop(&self) {
        self.live.set(false);
    }

    /// `true` while the session still accepts ticks.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

/// Start/stop lifecycle object tying a frame source, the compositor, and the
/// grid together.
///
/// The embedder schedules [`PreviewSession::tick`] once per display refresh
/// and calls [`PreviewSession::stop`] (or uses a [`StopHandle`]) at teardown.
/// After stopping, ticks are no-ops and no further surface writes occur; the
/// embedder must still cancel its own pending scheduled callback.
pub struct PreviewSession<S: FrameSource> {
    source: S,
    compositor: Compositor,
    grid: GridIndex,
    live: Rc<Cell<bool>>,
}

impl<S: FrameSource> PreviewSession<S> {
    /// Create a session from a frame source and validated options.
    pub fn new(source: S, opts: PreviewOpts) -> GridlensResult<Self> {
        opts.validate()?;
        Ok(Self {
            source,
            compositor: Compositor::new(opts.opacity)?,
            grid: GridIndex::new(opts.rows, opts.cols)?,
            live: Rc::new(Cell::new(true)),
        })
    }

    /// Advance one scheduling tick against the destination rectangle's
    /// current measured size.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, destination: Size) -> TickOutcome {
        if !self.live.get() {
            return TickOutcome::Stopped;
        }
        self.compositor.tick(&self.source, destination);
        TickOutcome::Ticked
    }

    /// Capture the pixels a grid cell currently covers.
    ///
    /// The cell rectangle is recomputed from the surface's current size at
    /// call time, so the captured content always matches the on-screen cell
    /// regardless of how the surface has been resized since the last click.
    /// Out-of-range indices are an error; every other failure is absorbed
    /// into `encoded_data: None` with the label still present.
    #[tracing::instrument(skip(self))]
    pub fn capture_cell(&self, row: u32, col: u32) -> GridlensResult<CapturedImage> {
        let rect = self
            .grid
            .cell_rect(row, col, self.compositor.surface().size())?;
        Ok(CapturedImage {
            cell_label: self.grid.cell_label(row, col),
            encoded_data: capture_surface_region(self.compositor.surface(), rect),
        })
    }

    /// Stop the session; subsequent ticks are no-ops.
    pub fn stop(&self) {
        self.live.set(false);
    }

    /// `true` while the session accepts ticks.
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Handle for stopping the session from teardown glue.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            live: self.live.clone(),
        }
    }

    /// Borrow the composited surface.
    pub fn surface(&self) -> &Surface {
        self.compositor.surface()
    }

    /// The session's grid partition.
    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// Current compositing opacity.
    pub fn opacity(&self) -> f32 {
        self.compositor.opacity()
    }

    /// Set the compositing opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.compositor.set_opacity(opacity);
    }

    /// Borrow the frame source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the frame source, e.g. to feed it new frames.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/preview_session.rs"]
mod tests;
