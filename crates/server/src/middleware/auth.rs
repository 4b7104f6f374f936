use crate::{error::AppError, error::auth::AuthError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use log::debug;

/// Authentication gate for protected route groups.
///
/// Rejects the request with 401 before any handler runs unless it carries a
/// valid bearer token. On success the verified [`Claims`](crate::auth::Claims)
/// are inserted into the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = {
        let token = bearer_token(request.headers())?;
        state.verifier.verify(token)?
    };

    debug!("Authenticated request from {}", claims.sub);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_tokens() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(bearer_token(&headers("bearer  abc")).unwrap(), "abc");
    }

    #[test]
    fn missing_header_is_missing_token() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn other_schemes_are_malformed() {
        for value in ["Basic abc", "Bearer", "Bearer   ", "abc"] {
            assert!(matches!(
                bearer_token(&headers(value)),
                Err(AuthError::MalformedHeader)
            ));
        }
    }
}
