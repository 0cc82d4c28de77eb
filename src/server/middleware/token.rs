//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs whose `sub` claim holds the user id. The role claim is
//! informational only; authorization always re-reads the user from the database
//! so role changes apply immediately.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenDto,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::user::User,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id.
    pub sub: String,
    /// Role at the time the token was issued.
    pub role: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `user` issued at `issued_at` and valid for `ttl_secs`.
    pub fn for_user(user: &User, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            sub: user.id.to_string(),
            role: user.role.as_str().to_string(),
            iat: issued_at,
            exp: issued_at + ttl_secs,
        }
    }
}

/// Signing material and lifetime for bearer tokens.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn from_secret(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs,
        }
    }

    /// Signs arbitrary claims.
    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| InternalError::TokenEncode(e).into())
    }

    /// Issues a fresh token for `user` valid for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<TokenDto, AppError> {
        let claims = Claims::for_user(user, Utc::now().timestamp(), self.ttl_secs);

        Ok(TokenDto {
            access_token: self.encode(&claims)?,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl_secs,
        })
    }

    /// Decodes and validates signature and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
