// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` duration probe.
//!
//! Opens a media file just long enough to read its length. Decoding is not
//! performed; [`ClockMedia`](super::ClockMedia) only needs the duration to
//! report `loadedmetadata` and bound its timeline.
//!
//! Built without the `ffmpeg` feature, probing always fails with
//! [`MediaError::ProbeUnavailable`] and the duration stays unknown.

use crate::error::MediaError;
use std::path::{Path, PathBuf};

#[cfg(feature = "ffmpeg")]
static FFMPEG_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize `FFmpeg` once, with its log level lowered to errors.
///
/// Safe to call repeatedly.
///
/// # Errors
///
/// Returns [`MediaError::Other`] if the library fails to initialize.
#[cfg(feature = "ffmpeg")]
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Reads the duration of the media file at `path`, in seconds.
///
/// Uses the best video stream's duration, falling back to the container
/// duration when the stream does not carry one.
///
/// # Errors
///
/// Returns a [`MediaError`] if the file cannot be opened, has no video
/// stream, or reports no usable duration.
#[cfg(feature = "ffmpeg")]
pub fn probe_duration(path: &Path) -> Result<f64, MediaError> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| MediaError::from_message(&e.to_string()))?;

    let stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(MediaError::NoVideoStream)?;

    let duration_secs = if stream.duration() > 0 {
        let time_base = stream.time_base();
        stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    if duration_secs.is_finite() && duration_secs > 0.0 {
        Ok(duration_secs)
    } else {
        Err(MediaError::CorruptedFile)
    }
}

#[cfg(not(feature = "ffmpeg"))]
pub fn probe_duration(_path: &Path) -> Result<f64, MediaError> {
    Err(MediaError::ProbeUnavailable)
}

/// Runs [`probe_duration`] on the blocking thread pool.
///
/// # Errors
///
/// Same as [`probe_duration`]; a panicked or cancelled probe maps to
/// [`MediaError::Other`].
pub async fn probe_duration_async(path: PathBuf) -> Result<f64, MediaError> {
    tokio::task::spawn_blocking(move || probe_duration(&path))
        .await
        .map_err(|e| MediaError::Other(e.to_string()))?
}
