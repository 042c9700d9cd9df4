use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One user's journal record for one calendar day. The `(user_id, entry_date)`
/// pair is unique at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    pub user_id: i64,
    pub entry_date: NaiveDate,
    pub content: String,
    pub mood: String,
}

/// POST /add — wholesale upsert of one day's entry. `date` defaults to today.
#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    pub date: Option<NaiveDate>,
    pub content: String,
    pub mood: String,
}

/// POST /api/add-to-today — append-only write, mood left untouched.
#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EntryDateQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub date: NaiveDate,
    pub content: String,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: i32,
}

#[derive(Debug, Serialize)]
pub struct GraphPoint {
    pub date: NaiveDate,
    pub value: i32,
}
