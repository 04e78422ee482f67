use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::TokenClaims;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ISSUER: &str = "forum-test";

pub fn test_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
    }
}

/// Signs a token for `uid`; a negative `ttl_seconds` yields an expired one.
pub fn sign(uid: i64, token_type: &str, ttl_seconds: i64) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: uid,
        exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        iss: TEST_ISSUER.to_string(),
        token_type: token_type.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Should encode test token")
}

pub fn access_token(uid: i64) -> String {
    sign(uid, "access", 3600)
}
