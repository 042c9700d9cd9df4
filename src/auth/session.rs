use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub const SESSION_COOKIE: &str = "dailyecho_session";

/// Contents of the signed session token. The token is stateless: destroying a
/// session only means dropping the cookie that carries it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: Uuid,
}

pub fn issue(user_id: i64, username: &str, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (now + Duration::seconds(config.session_ttl_secs)).timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create session token: {}", e)))
}

pub fn verify(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

/// Session cookie wrapping an issued token. HttpOnly so the frontend script
/// never sees the token.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Named removal cookie for logout; must match the path the session was set
/// with or browsers keep the original.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            session_secret: secret.into(),
            session_ttl_secs: 3600,
            static_dir: "static".into(),
        }
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let config = test_config("a-test-secret");
        let token = issue(42, "alice", &config).unwrap();
        let claims = verify(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue(1, "bob", &test_config("secret-one")).unwrap();
        assert!(verify(&token, &test_config("secret-two")).is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let config = test_config("a-test-secret");
        let mut token = issue(7, "carol", &config).unwrap();
        token.push('x');
        assert!(verify(&token, &config).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut config = test_config("a-test-secret");
        config.session_ttl_secs = -120;
        let token = issue(9, "dave", &config).unwrap();
        assert!(verify(&token, &config).is_err());
    }
}
