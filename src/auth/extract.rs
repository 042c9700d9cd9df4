use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

use crate::auth::session;
use crate::AppState;

/// Identity resolved from a valid session cookie.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}

/// Extractor that never rejects: absent, expired, or tampered cookies all
/// resolve to `None`, leaving each handler to answer its own neutral value
/// (JSON routes) or redirect (page routes).
pub struct MaybeUser(pub Option<SessionUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let Some(cookie) = jar.get(session::SESSION_COOKIE) else {
            return Ok(Self(None));
        };

        match session::verify(cookie.value(), &state.config) {
            Ok(claims) => Ok(Self(Some(SessionUser {
                id: claims.sub,
                username: claims.username,
            }))),
            Err(_) => {
                tracing::debug!("Rejected session cookie");
                Ok(Self(None))
            }
        }
    }
}
