use thiserror::Error;

/// Errors raised while talking to the Google Sheets values API.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The service account key file could not be read or the authenticator could not
    /// be built from it.
    #[error("Failed to load service account key: {0}")]
    KeyFile(#[source] std::io::Error),

    /// The OAuth2 token exchange with Google failed.
    #[error(transparent)]
    Auth(#[from] yup_oauth2::Error),

    /// Google answered the token request without an access token.
    #[error("Token response did not contain an access token")]
    MissingAccessToken,

    /// The request URL could not be built from the configured base URL.
    #[error("Invalid Sheets API URL: {0}")]
    InvalidUrl(String),

    /// Transport-level HTTP failure.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The Sheets API answered with a non-success status.
    #[error("Sheets API returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body for diagnostics
        body: String,
    },
}
