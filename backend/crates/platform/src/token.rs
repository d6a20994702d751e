//! Session Tokens
//!
//! Stateless bearer credentials: an HS256 JWT carrying the identity's
//! `email` and `userid`. Nothing is stored server-side, so a token stays
//! valid for as long as the signing secret does. No `exp` claim is issued
//! or required.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

/// Claims carried by every session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    pub userid: String,
}

impl SessionClaims {
    pub fn new(email: impl Into<String>, user_id: &UserId) -> Self {
        Self {
            email: email.into(),
            userid: user_id.to_string(),
        }
    }

    /// The identity this token speaks for; `None` if `userid` is malformed
    pub fn user_id(&self) -> Option<UserId> {
        UserId::parse_str(&self.userid)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, wrong algorithm or not a JWT at all
    #[error("Token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),

    /// Signature is fine but the claims do not name an identity
    #[error("Token does not identify an account")]
    MissingIdentity,
}

/// Issues and verifies session tokens with a server-held secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Service with a random 256-bit secret; tokens die with the process
    pub fn ephemeral() -> Self {
        let mut secret = Zeroizing::new([0u8; 32]);
        OsRng.fill_bytes(secret.as_mut());
        Self::from_secret(secret.as_ref())
    }

    /// Sign `claims` into a compact JWT
    pub fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }

    /// Check the signature and return the claims exactly as issued
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &self.validation)?;

        if data.claims.user_id().is_none() {
            return Err(TokenError::MissingIdentity);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
