use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,
}

/// Claims carried by bearer tokens issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,          // User ID
    pub iss: String,        // Issuer
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub token_type: String, // only "access" tokens authorize requests
}

/// Verification side of the identity collaborator. Issuing tokens is not our job.
pub trait TokenProvider: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
