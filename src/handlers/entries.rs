use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};

use crate::auth::extract::MaybeUser;
use crate::error::AppResult;
use crate::models::entry::{
    AppendRequest, Entry, EntryDateQuery, EntryView, SaveEntryRequest,
};
use crate::models::mood;
use crate::AppState;

fn unauthorized() -> Json<Value> {
    Json(json!({ "error": "unauthorized" }))
}

/// Wholesale upsert of one day's entry: an existing row for `(user, date)`
/// has both content and mood replaced. Idempotent under repetition; a race
/// between two writers resolves to last-write-wins.
pub async fn save_entry(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(body): Json<SaveEntryRequest>,
) -> AppResult<Json<Value>> {
    let Some(user) = user else {
        return Ok(unauthorized());
    };

    let entry_date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    sqlx::query(
        r#"
        INSERT INTO entries (user_id, entry_date, content, mood)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET
            content = excluded.content,
            mood = excluded.mood
        "#,
    )
    .bind(user.id)
    .bind(entry_date)
    .bind(&body.content)
    .bind(&body.mood)
    .execute(&state.db)
    .await?;

    Ok(Json(json!({ "status": "saved" })))
}

/// Append-only write to today's entry, separated from existing content by a
/// blank line; mood is never touched. Blank input is a soft no-op, not an
/// error. A fresh row gets the default mood.
pub async fn append_to_today(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(body): Json<AppendRequest>,
) -> AppResult<Json<Value>> {
    let Some(user) = user else {
        return Ok(unauthorized());
    };

    let text = body.content.trim();
    if text.is_empty() {
        return Ok(Json(json!({ "status": "empty" })));
    }

    let today = Utc::now().date_naive();

    let existing = sqlx::query_as::<_, Entry>(
        "SELECT * FROM entries WHERE user_id = ? AND entry_date = ?",
    )
    .bind(user.id)
    .bind(today)
    .fetch_optional(&state.db)
    .await?;

    match existing {
        Some(entry) => {
            let updated = format!("{}\n\n{}", entry.content, text);
            sqlx::query("UPDATE entries SET content = ? WHERE user_id = ? AND entry_date = ?")
                .bind(&updated)
                .bind(user.id)
                .bind(today)
                .execute(&state.db)
                .await?;
        }
        None => {
            sqlx::query(
                "INSERT INTO entries (user_id, entry_date, content, mood) VALUES (?, ?, ?, ?)",
            )
            .bind(user.id)
            .bind(today)
            .bind(text)
            .bind(mood::DEFAULT_MOOD)
            .execute(&state.db)
            .await?;
        }
    }

    Ok(Json(json!({ "status": "added" })))
}

pub async fn entry_by_date(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(query): Query<EntryDateQuery>,
) -> AppResult<Json<Option<EntryView>>> {
    let Some(user) = user else {
        return Ok(Json(None));
    };

    let row = sqlx::query_as::<_, (NaiveDate, String, String)>(
        "SELECT entry_date, content, mood FROM entries WHERE user_id = ? AND entry_date = ?",
    )
    .bind(user.id)
    .bind(query.date)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(row.map(|(date, content, mood)| EntryView {
        date,
        content,
        mood,
    })))
}

/// Today's content as a bare JSON string; empty when there is no row yet.
pub async fn today_entry(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Json<String>> {
    let Some(user) = user else {
        return Ok(Json(String::new()));
    };

    let content = sqlx::query_scalar::<_, String>(
        "SELECT content FROM entries WHERE user_id = ? AND entry_date = ?",
    )
    .bind(user.id)
    .bind(Utc::now().date_naive())
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(content.unwrap_or_default()))
}
