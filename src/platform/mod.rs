//! Host platform boundary
//!
//! Hosts translate their own window, lifecycle and pointer callbacks into
//! `HostSignal`s and feed them to `GameLoop::handle` from their UI thread.

use serde::{Deserialize, Serialize};

/// Inbound signal from the host shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostSignal {
    /// Render surface created and ready for drawing
    SurfaceReady,
    /// Render surface about to go away; the loop must be stopped first
    SurfaceDestroyed,
    /// Viewport changed size; starts a new session
    Resize { width: f32, height: f32 },
    /// App went to the background
    Pause,
    /// App came back to the foreground
    Resume,
    /// Player asked for a new game
    Restart,
    /// Pointer moved (only `x` steers the paddle)
    PointerMove { x: f32, y: f32 },
}
