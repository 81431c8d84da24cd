// SPDX-License-Identifier: MPL-2.0
//! Player control surface logic.
//!
//! This module is independent of any UI toolkit. It is driven through
//! [`PlayerController::handle`] with [`PlayerEvent`]s and reads/writes a
//! [`MediaElement`](crate::application::port::MediaElement) and a
//! [`FullscreenHost`](crate::application::port::FullscreenHost).
//!
//! # Components
//!
//! - [`controller`]: event handling and overlay state
//! - [`gesture`]: single/double tap disambiguation
//! - [`timer`]: replace-on-reschedule one-shot deadlines
//! - [`source`]: media source handle allocation
//! - [`visual`]: pure derivation of what the controls display
//! - [`event`]: input events, key shortcuts, dispositions

pub mod controller;
pub mod event;
pub mod gesture;
pub mod settings;
pub mod source;
pub mod timer;
pub mod visual;

pub use controller::PlayerController;
pub use event::{Disposition, Key, PlayerEvent, Shortcut, SurfacePoint};
pub use gesture::{TapOutcome, TapTracker};
pub use settings::PlayerSettings;
pub use source::SourceRegistry;
pub use timer::OneShot;
pub use visual::{
    ControlsVisual, Layout, OverlayState, PlaybackIcon, PlaybackSnapshot, VolumeIcon,
};
