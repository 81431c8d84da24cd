// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability port.

use crate::error::FullscreenError;

/// Host capability to show the player container fullscreen.
///
/// A request may be rejected (no window yet, platform refusal); the caller
/// decides how to report it.
pub trait FullscreenHost {
    /// Returns true while the container is fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Asks the host to enter fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`FullscreenError`] if the host cannot honour the request.
    fn request(&mut self) -> Result<(), FullscreenError>;

    /// Leaves fullscreen. Does nothing when already windowed.
    fn exit(&mut self);
}
