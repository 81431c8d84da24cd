// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the `FFmpeg` probe that feeds them.
//!
//! # Available Adapters
//!
//! - [`clock_media`]: Clock-driven media element (implements [`MediaElement`])
//! - [`ffmpeg`]: Duration probing via `FFmpeg`
//!
//! The window fullscreen adapter lives in `app::fullscreen` because it needs
//! Iced window handles.
//!
//! [`MediaElement`]: crate::application::port::MediaElement

pub mod clock_media;
pub mod ffmpeg;

pub use clock_media::ClockMedia;
pub use ffmpeg::{probe_duration, probe_duration_async};
