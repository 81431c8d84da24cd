// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Media Error: {0}")]
    Media(#[from] MediaError),
}

/// Failures while probing a selected media file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// Codec is not supported by the system's FFmpeg.
    #[error("Unsupported video codec: {0}")]
    UnsupportedCodec(String),

    /// File appears corrupted or has invalid data.
    #[error("Video file is corrupted")]
    CorruptedFile,

    /// File exists but contains no video stream.
    #[error("No video stream found")]
    NoVideoStream,

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(String),

    /// The build has no probing backend.
    #[error("Media probing is not available in this build")]
    ProbeUnavailable,

    /// Generic error with raw message.
    #[error("{0}")]
    Other(String),
}

impl MediaError {
    /// Categorizes a raw backend message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec errors first, they might contain "not found"
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return MediaError::UnsupportedCodec(codec);
            }
        }

        if msg_lower.contains("no such file")
            || (msg_lower.contains("not found") && !msg_lower.contains("decoder"))
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return MediaError::Io(msg.to_string());
        }

        if msg_lower.contains("no video stream")
            || msg_lower.contains("no video track")
            || msg_lower.contains("invalid data found")
        {
            return MediaError::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return MediaError::CorruptedFile;
        }

        MediaError::Other(msg.to_string())
    }

    fn extract_codec_name(msg: &str) -> Option<String> {
        let codecs = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2",
        ];
        codecs
            .into_iter()
            .find(|codec| msg.contains(codec))
            .map(str::to_uppercase)
    }
}

/// Rejection of a fullscreen request by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// No window is available to switch mode yet.
    #[error("no window available")]
    NoWindow,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn media_error_from_message_io() {
        let err = MediaError::from_message("No such file or directory");
        assert!(matches!(err, MediaError::Io(_)));
    }

    #[test]
    fn media_error_from_message_no_stream() {
        let err = MediaError::from_message("No video stream found in file");
        assert_eq!(err, MediaError::NoVideoStream);
    }

    #[test]
    fn media_error_from_message_codec() {
        let err = MediaError::from_message("Decoder h264 not found");
        assert_eq!(err, MediaError::UnsupportedCodec("H264".to_string()));
    }

    #[test]
    fn media_error_from_message_corrupted() {
        let err = MediaError::from_message("File is corrupt or invalid");
        assert_eq!(err, MediaError::CorruptedFile);
    }

    #[test]
    fn media_error_from_message_falls_back_to_other() {
        let err = MediaError::from_message("something odd");
        assert_eq!(err, MediaError::Other("something odd".to_string()));
    }

    #[test]
    fn media_error_converts_into_crate_error() {
        let err: Error = MediaError::CorruptedFile.into();
        assert_eq!(err.to_string(), "Media Error: Video file is corrupted");
    }

    #[test]
    fn fullscreen_error_display() {
        assert_eq!(FullscreenError::NoWindow.to_string(), "no window available");
    }
}
