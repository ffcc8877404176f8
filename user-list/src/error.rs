use users_core::ApiError;

/// Why a fetch produced no users.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP client could not be built. Nothing was sent.
    #[error("HTTP client setup failed: {0}")]
    Setup(#[source] reqwest::Error),

    /// The request never got a complete response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with a list of users.
    #[error(transparent)]
    Api(#[from] ApiError),
}
