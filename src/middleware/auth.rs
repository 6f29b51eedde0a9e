//! Bearer credential extraction
//!
//! Handlers that need an account take `AuthUser`; handlers where an account
//! is optional take `MaybeAuthUser`.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::AppState;
use crate::services::token::Claims;
use crate::utils::errors::TurnoutError;

/// Claims of a request that carried a valid bearer credential
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// Claims of the bearer credential, if one was sent.
///
/// A credential that is present but invalid is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Claims>);

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// `Ok(None)` when the header is absent.
fn bearer_token(parts: &Parts) -> Result<Option<&str>, TurnoutError> {
    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| TurnoutError::Authentication("Malformed Authorization header".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TurnoutError::Authentication("Expected a Bearer token".to_string()))?;

    Ok(Some(token))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = TurnoutError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| TurnoutError::Authentication("Authentication required".to_string()))?;

        let claims = state.services.auth_service.verify_token(token)?;
        Ok(Self(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = TurnoutError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match bearer_token(parts)? {
            Some(token) => Ok(Self(Some(state.services.auth_service.verify_token(token)?))),
            None => Ok(Self(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/events");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&parts_with(None)).unwrap(), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer abc.def"))).unwrap(), Some("abc.def"));
        assert!(bearer_token(&parts_with(Some("Basic dXNlcg=="))).is_err());
        assert!(bearer_token(&parts_with(Some("Bearer   "))).is_err());
    }
}
