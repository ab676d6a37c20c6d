//! Error types for the d3d11-inspect library

use thiserror::Error;

/// Error type for capability-table queries
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Caller-declared buffer size does not match the record's fixed size
    #[error("Feature data size mismatch for {feature:?}: expected {expected} bytes, got {provided}")]
    SizeMismatch {
        feature: crate::inspection::Feature,
        expected: usize,
        provided: usize,
    },

    /// Feature kind is not recognized or not supported by this device
    #[error("Feature not supported: {0}")]
    Unsupported(u32),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Error type for monitor and display-mode queries
#[derive(Error, Debug)]
pub enum WsiError {
    /// The monitor-info query failed (stale or invalid monitor handle)
    #[error("Failed to query monitor info: {0}")]
    MonitorInfoFailed(&'static str),

    /// The requested display mode index does not exist.
    ///
    /// This is the normal termination signal when walking a monitor's mode
    /// list and is never logged.
    #[error("Display mode not found")]
    ModeNotFound,

    /// Monitor queries are not available on this platform
    #[error("Monitor queries are not supported on this platform: {0}")]
    UnsupportedPlatform(String),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Combined result type for capability-table queries
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Combined result type for monitor queries
pub type WsiResult<T> = Result<T, WsiError>;

impl FeatureError {
    /// Both failure modes are invalid-argument errors to the caller;
    /// neither is worth retrying.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FeatureError::SizeMismatch { .. } | FeatureError::Unsupported(_)
        )
    }

    /// Get error code for FFI
    pub fn to_error_code(&self) -> i32 {
        match self {
            FeatureError::SizeMismatch { .. } => -1001,
            FeatureError::Unsupported(_) => -1002,
            FeatureError::Other(_) => -1999,
        }
    }
}

impl WsiError {
    /// Check whether the error is the expected end-of-enumeration signal
    pub fn is_enumeration_end(&self) -> bool {
        matches!(self, WsiError::ModeNotFound)
    }

    /// Get error code for FFI
    pub fn to_error_code(&self) -> i32 {
        match self {
            WsiError::MonitorInfoFailed(_) => -2001,
            WsiError::ModeNotFound => -2002,
            WsiError::UnsupportedPlatform(_) => -2003,
            WsiError::Other(_) => -2999,
        }
    }
}
