//! Token authentication
//!
//! Handlers that need a caller take [`CurrentUser`]; it resolves the
//! `Authorization: Token <key>` header through the account service.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use registrar_domain::User;

use crate::{error::ApiError, state::AppState};

const SCHEME: &str = "Token";
const MISSING_CREDENTIALS: &str = "Authentication credentials were not provided.";
const MALFORMED_HEADER: &str = "Invalid token header.";

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Pull the key out of `Authorization: Token <key>`
///
/// `Ok(None)` when the header is absent or uses another scheme.
pub fn token_from_headers(headers: &HeaderMap) -> Result<Option<&str>, ApiError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| ApiError::Authentication(MALFORMED_HEADER.to_string()))?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(key), None) if scheme.eq_ignore_ascii_case(SCHEME) => Ok(Some(key)),
        (Some(scheme), _, _) if scheme.eq_ignore_ascii_case(SCHEME) => {
            Err(ApiError::Authentication(MALFORMED_HEADER.to_string()))
        }
        _ => Ok(None),
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers)?
            .ok_or_else(|| ApiError::Authentication(MISSING_CREDENTIALS.to_string()))?;

        let user = state.accounts.authenticate(token).await?;
        tracing::trace!(user = %user.id(), role = %user.role(), "request authenticated");
        Ok(CurrentUser(user))
    }
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
    fn test_token_scheme_parsed() {
        let h = headers("Token abc123");
        assert_eq!(token_from_headers(&h).unwrap(), Some("abc123"));

        let h = headers("token abc123");
        assert_eq!(token_from_headers(&h).unwrap(), Some("abc123"));
    }

    #[test]
    fn test_missing_or_foreign_scheme_is_none() {
        assert_eq!(token_from_headers(&HeaderMap::new()).unwrap(), None);
        assert_eq!(token_from_headers(&headers("Bearer abc")).unwrap(), None);
    }

    #[test]
    fn test_malformed_token_header() {
        assert!(token_from_headers(&headers("Token")).is_err());
        assert!(token_from_headers(&headers("Token a b")).is_err());
    }
}
