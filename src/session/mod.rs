//! Session lifecycle.
//!
//! The preview loop is driven by the embedder's display-refresh scheduling
//! primitive; the session object carries the liveness state that makes
//! teardown safe: the flag is checked at tick-top, so a callback already in
//! flight when the session stops performs no surface write. Cancelling the
//! next scheduled callback remains the embedder's half of the contract.

/// The `PreviewSession` lifecycle object and its options.
pub mod preview_session;
