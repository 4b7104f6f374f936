use thiserror::Error;

/// Reasons a request is turned away by the authentication gate.
///
/// Every variant results in 401 Unauthorized.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authorized, no token provided")]
    MissingToken,

    /// The Authorization header is present but is not `Bearer <token>`
    #[error("Not authorized, malformed authorization header")]
    MalformedHeader,

    #[error("Not authorized, token expired")]
    ExpiredToken,

    /// Bad signature, wrong issuer or audience, or undecodable token
    #[error("Not authorized, token failed verification")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}
