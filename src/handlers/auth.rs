use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session;
use crate::db;
use crate::error::AppResult;
use crate::models::user::{LoginForm, RegisterForm, User};
use crate::AppState;

fn failure_page(status: StatusCode, message: &str, back: &str) -> Response {
    let body = format!(r#"<p>{message}</p><p><a href="{back}">Back</a></p>"#);
    (status, Html(body)).into_response()
}

/// Missing user and wrong password produce the identical response so the
/// login form cannot be used to enumerate usernames.
fn invalid_credentials() -> Response {
    failure_page(StatusCode::UNAUTHORIZED, "Invalid credentials", "/")
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        return Ok(failure_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            &errors.to_string(),
            "/register",
        ));
    }

    let password_hash = hash_password(&form.password)?;

    // Let the unique constraint arbitrate duplicates; a pre-check would race.
    let inserted = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&form.username)
        .bind(&password_hash)
        .execute(&state.db)
        .await;

    match inserted {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(err) if db::is_unique_violation(&err) => Ok(failure_page(
            StatusCode::CONFLICT,
            "Username already taken",
            "/register",
        )),
        Err(err) => Err(err.into()),
    }
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(&form.username)
        .fetch_optional(&state.db)
        .await?;

    let Some(user) = user else {
        return Ok(invalid_credentials());
    };

    if !verify_password(&form.password, &user.password_hash)? {
        return Ok(invalid_credentials());
    }

    let token = session::issue(user.id, &user.username, &state.config)?;
    let jar = jar.add(session::session_cookie(token));

    Ok((jar, Redirect::to("/dailyecho")).into_response())
}

/// Idempotent: removing an absent cookie is a no-op.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(session::removal_cookie()), Redirect::to("/"))
}
