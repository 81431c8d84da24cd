// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Media positions, volumes and progress percentages are floats; compare
//! them with `approx` rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
