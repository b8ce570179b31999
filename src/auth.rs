// ABOUTME: JWT bearer-token authentication for conversation owners
// ABOUTME: Issues and validates HS256 tokens carrying the owning user's ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Authentication
//!
//! Every conversation belongs to a user. Requests prove ownership with an
//! HS256 bearer token whose `sub` claim is the user's UUID and whose `aud`
//! claim is `authenticated`.

use crate::constants::jwt::AUDIENCE;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use scorecard_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature, audience or subject is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed `JWT`
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExpired { expired_at } => write!(
                f,
                "JWT token expired at {}",
                expired_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            Self::TokenInvalid { reason } => write!(f, "JWT token is invalid: {reason}"),
            Self::TokenMalformed { details } => write!(f, "JWT token is malformed: {details}"),
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            other => Self::auth_invalid(other.to_string()),
        }
    }
}

/// `JWT` claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience
    pub aud: String,
}

/// Authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Owning user
    pub user_id: Uuid,
    /// Email from the token, may be empty
    pub email: String,
}

/// Issues and validates tokens with a shared secret
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    /// Create a manager from the HS256 secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Issue a token for `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
            aud: AUDIENCE.to_owned(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")).with_source(e))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing why the token was rejected
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_audience(&[AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))?;

        if claims.exp <= Utc::now().timestamp() {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
            tracing::debug!("Rejected token expired at {expired_at}");
            return Err(JwtValidationError::TokenExpired { expired_at });
        }

        Ok(claims)
    }

    /// Validate a token and resolve the calling user
    ///
    /// # Errors
    ///
    /// Returns an authentication error if the token is invalid or its subject
    /// is not a UUID
    pub fn authenticate(&self, token: &str) -> AppResult<AuthResult> {
        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            AppError::from(JwtValidationError::TokenInvalid {
                reason: "Token subject is not a user ID".into(),
            })
        })?;

        Ok(AuthResult {
            user_id,
            email: claims.email,
        })
    }

    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        tracing::warn!("JWT token validation failed: {:?}", e);

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidAudience => JwtValidationError::TokenInvalid {
                reason: "Token audience is not accepted".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            ErrorKind::Utf8(utf8_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid UTF-8: {utf8_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_core::errors::ErrorCode;

    #[test]
    fn test_generate_and_authenticate() {
        let manager = AuthManager::new(b"unit-test-secret", 1);
        let user_id = Uuid::new_v4();
        let token = manager.generate_token(user_id, "a@example.com").unwrap();

        let auth = manager.authenticate(&token).unwrap();
        assert_eq!(auth.user_id, user_id);
        assert_eq!(auth.email, "a@example.com");
    }

    #[test]
    fn test_expired_token_maps_to_auth_expired() {
        let manager = AuthManager::new(b"unit-test-secret", -1);
        let token = manager.generate_token(Uuid::new_v4(), "").unwrap();

        let err = manager.validate_token(&token).unwrap_err();
        assert!(matches!(err, JwtValidationError::TokenExpired { .. }));
        assert_eq!(AppError::from(err).code, ErrorCode::AuthExpired);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = AuthManager::new(b"secret-one", 1);
        let verifier = AuthManager::new(b"secret-two", 1);
        let token = issuer.generate_token(Uuid::new_v4(), "").unwrap();

        let err = verifier.authenticate(&token).unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let manager = AuthManager::new(b"unit-test-secret", 1);
        assert!(matches!(
            manager.validate_token("not-a-jwt"),
            Err(JwtValidationError::TokenMalformed { .. })
        ));
    }
}
