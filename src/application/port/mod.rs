// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the player controller can be driven
//! headless in tests.
//!
//! # Available Ports
//!
//! - [`media`]: The media element (playback, position, volume, rate)
//! - [`fullscreen`]: The host fullscreen capability
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Methods are synchronous; the Iced shell turns host requests into `Task`s

pub mod fullscreen;
pub mod media;

pub use fullscreen::FullscreenHost;
pub use media::MediaElement;
