use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::auth::extract::MaybeUser;

pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../templates/login.html"))
}

pub async fn register_page() -> Html<&'static str> {
    Html(include_str!("../../templates/register.html"))
}

/// The single-page app shell. Page routes redirect when unauthenticated,
/// unlike the JSON routes which answer neutral values.
pub async fn app_shell(MaybeUser(user): MaybeUser) -> Response {
    match user {
        Some(_) => Html(include_str!("../../templates/index.html")).into_response(),
        None => Redirect::to("/").into_response(),
    }
}
