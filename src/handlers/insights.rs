use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;

use crate::auth::extract::MaybeUser;
use crate::error::AppResult;
use crate::models::entry::{GraphPoint, SearchHit, SearchParams, TrendPoint};
use crate::models::mood;
use crate::AppState;

/// Every entry-date the caller owns, keyed to its mood tag. Drives the
/// calendar heat-map.
pub async fn calendar(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Json<BTreeMap<String, String>>> {
    let Some(user) = user else {
        return Ok(Json(BTreeMap::new()));
    };

    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT entry_date, mood FROM entries WHERE user_id = ?",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows.into_iter().collect()))
}

/// Case-insensitive substring search over the caller's own entries, newest
/// first. A blank query answers an empty set rather than the full history.
pub async fn search(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchHit>>> {
    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let q = params.q.trim();
    if q.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let rows = sqlx::query_as::<_, (NaiveDate, String)>(
        r#"
        SELECT entry_date, content
        FROM entries
        WHERE user_id = ? AND content LIKE ?
        ORDER BY entry_date DESC
        "#,
    )
    .bind(user.id)
    .bind(format!("%{}%", q))
    .fetch_all(&state.db)
    .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(date, content)| SearchHit { date, content })
            .collect(),
    ))
}

/// Full mood history as `{date, score}` points, oldest first. Unrecognized
/// moods score 0 here.
pub async fn mood_trend(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Json<Vec<TrendPoint>>> {
    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let rows = sqlx::query_as::<_, (NaiveDate, String)>(
        "SELECT entry_date, mood FROM entries WHERE user_id = ? ORDER BY entry_date ASC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(date, m)| TrendPoint {
                date,
                score: mood::trend_score(&m),
            })
            .collect(),
    ))
}

/// The caller's last 7 entries, re-ordered oldest to newest for the line
/// chart. Unrecognized moods sit at the chart's neutral baseline.
pub async fn recent_graph(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Json<Vec<GraphPoint>>> {
    let Some(user) = user else {
        return Ok(Json(Vec::new()));
    };

    let mut rows = sqlx::query_as::<_, (NaiveDate, String)>(
        "SELECT entry_date, mood FROM entries WHERE user_id = ? ORDER BY entry_date DESC LIMIT 7",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    rows.reverse();

    Ok(Json(
        rows.into_iter()
            .map(|(date, m)| GraphPoint {
                date,
                value: mood::graph_value(&m),
            })
            .collect(),
    ))
}
