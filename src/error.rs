/// Failures raised while deriving or spoofing a user-agent.
///
/// None of these cross the public forge surface: the forge logs them and
/// falls back to the best string it has.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// The engine never produced a usable `navigator.userAgent` result.
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
    /// The raw engine string lacks a marker needed for rebranding.
    #[error("malformed engine user-agent: missing {0}")]
    MalformedEngineUa(&'static str),
    /// The standard user-agent lacks a marker needed for the desktop spoof.
    #[error("malformed user-agent: missing {0}")]
    MalformedUa(&'static str),
    /// Derivation was requested off the thread that owns the engine.
    #[error("user-agent derivation requested off the engine thread")]
    WrongThread,
    /// Reading or writing a file-backed store failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A file-backed store held invalid JSON.
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result with a [`ForgeError`].
pub type Result<T> = std::result::Result<T, ForgeError>;
