use thiserror::Error;

/// The central error type for the collections crate.
///
/// Container-specific errors convert into it with `?`, so callers that mix
/// several containers can propagate a single type.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Ring buffer error: {0}")]
    RingBuffer(#[from] RingBufferError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures reported by [`crate::array::RingBuffer`].
///
/// Both variants are raised before any state is touched, so the buffer is
/// still valid (and unchanged) after an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("index {index} out of bounds for ring buffer of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("cannot resize to capacity {requested}: must exceed current capacity {capacity}")]
    InvalidResize { requested: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, CollectionError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_USAGE_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<CollectionError>() {
        return match err {
            CollectionError::Config(_) => EXIT_CONFIG_ERROR,
            CollectionError::RingBuffer(_) => EXIT_USAGE_ERROR,
            CollectionError::Other(_) => EXIT_ERROR,
        };
    }

    if e.downcast_ref::<RingBufferError>().is_some() {
        return EXIT_USAGE_ERROR;
    }

    // Errors raised through anyhow::Context while reading config files
    let msg = e.to_string().to_lowercase();
    if msg.contains("config") {
        return EXIT_CONFIG_ERROR;
    }

    EXIT_ERROR
}
