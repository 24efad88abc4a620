use crate::theme::DisplayMode;

/// Result alias for style resolution.
pub type Result<T> = std::result::Result<T, DecorError>;

/// Row-local failures raised while resolving a labeled style.
///
/// Neither variant is fatal for a render pass: the caller skips the style for
/// that row and draws it with the default decoration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecorError {
    /// The style has no options registered for the requested display mode.
    #[error("style '{style}' has no options for {mode} mode")]
    Configuration { style: String, mode: DisplayMode },

    /// Prefix stripping was requested but the label does not start with the prefix.
    #[error("label '{label}' does not start with prefix '{prefix}'")]
    PrefixMismatch { prefix: String, label: String },
}

impl DecorError {
    /// Creates a missing-mode configuration error.
    pub fn configuration(style: impl Into<String>, mode: DisplayMode) -> Self {
        Self::Configuration {
            style: style.into(),
            mode,
        }
    }

    /// Creates a prefix mismatch error.
    pub fn prefix_mismatch(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self::PrefixMismatch {
            prefix: prefix.into(),
            label: label.into(),
        }
    }
}
