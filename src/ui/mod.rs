// SPDX-License-Identifier: MPL-2.0
//! User interface views and styling.
//!
//! Views are pure functions of [`ControlsVisual`](crate::player::ControlsVisual)
//! following the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`upload`] - Upload box with file picker and drop highlight
//! - [`surface`] - Video surface and skip indicators
//! - [`controls`] - Control bar
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Text glyph icons

pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod surface;
pub mod upload;
