use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const REFRESH_TOKEN: &str = "refresh-token";
const ACCESS_PREFIX: &str = "access-token-";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "learning-log-test".to_string(),
        leeway_seconds: 30,
    }
}

pub fn sign_claims(claims: &TokenClaims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("claims should encode")
}

/// Accepts `access-token-<uuid>` and `refresh-token`, rejects everything else
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        let claims = |sub: Uuid, token_type: &str| TokenClaims {
            sub,
            iss: "learning-log-test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: token_type.to_string(),
        };

        if token == REFRESH_TOKEN {
            return Ok(claims(Uuid::new_v4(), "refresh"));
        }

        token
            .strip_prefix(ACCESS_PREFIX)
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .map(|sub| claims(sub, "access"))
            .ok_or(TokenError::MalformedToken)
    }
}

pub fn stub_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(StubTokenProvider)
}

/// Authorization header that `StubTokenProvider` resolves to `user_id`
pub fn bearer_for(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}{}", ACCESS_PREFIX, user_id))
}
