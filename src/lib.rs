// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a custom-skinned video player control surface built with
//! the Iced GUI framework.
//!
//! The player logic lives in [`player`] as a host-agnostic controller driven
//! by explicit events and timestamps. Playback and fullscreen sit behind the
//! ports in [`application::port`], so the controller runs unchanged against
//! the in-process media clock, the Iced window or test doubles.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
