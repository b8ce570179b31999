// ABOUTME: Bearer-token authentication for HTTP handlers
// ABOUTME: Extracts the Authorization header and resolves the calling user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::auth::{AuthManager, AuthResult};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use scorecard_core::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticate a request from its headers
///
/// # Errors
///
/// Returns `AUTH_REQUIRED` when no `Authorization` header is present and
/// `AUTH_INVALID` when the header is not a valid bearer token
#[tracing::instrument(skip(headers, auth_manager), fields(user_id = tracing::field::Empty))]
pub fn authenticate_request(headers: &HeaderMap, auth_manager: &AuthManager) -> AppResult<AuthResult> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AppError::auth_required());
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be a Bearer token"))?;

    let result = auth_manager.authenticate(token)?;
    tracing::Span::current().record("user_id", result.user_id.to_string());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use scorecard_core::errors::ErrorCode;
    use uuid::Uuid;

    fn manager() -> AuthManager {
        AuthManager::new(b"middleware-test-secret", 1)
    }

    #[test]
    fn test_missing_header_is_auth_required() {
        let err = authenticate_request(&HeaderMap::new(), &manager()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_non_bearer_header_is_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        let err = authenticate_request(&headers, &manager()).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_valid_bearer_token() {
        let manager = manager();
        let user_id = Uuid::new_v4();
        let token = manager.generate_token(user_id, "").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let result = authenticate_request(&headers, &manager).unwrap();
        assert_eq!(result.user_id, user_id);
    }
}
