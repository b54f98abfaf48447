//! Catalog listing endpoint with filtering and pagination
//!
//! One route serves the whole listing UI: a page of band records matching
//! the active name filter, plus the total match count the client needs for
//! its pagination controls.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use bandex_common::db::BandRecord;

use crate::filter::NameFilter;
use crate::pagination::{page_window, DEFAULT_LIMIT};
use crate::AppState;

/// Query parameters for the listing
#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Rows per page
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Substring search on band name (optional)
    pub search: Option<String>,

    /// Single-letter prefix filter on band name (optional, wins over search)
    #[serde(rename = "startsWith")]
    pub starts_with: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Listing response: one page of records plus the total match count.
///
/// `total` counts every record matching the filter, independent of the
/// pagination window.
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<BandRecord>,
    pub total: i64,
}

/// GET /api/items
///
/// Returns a paginated page of band records. At most one of `search`
/// (substring) and `startsWith` (prefix) applies, both case-insensitive
/// against the band name; `startsWith` takes precedence. Results are
/// ordered by name (case-insensitive), tie-broken by guid, so consecutive
/// pages partition the filtered set deterministically.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<ItemsResponse>, ItemsError> {
    let filter = NameFilter::from_params(query.starts_with.as_deref(), query.search.as_deref());
    let window = page_window(query.page, query.limit);

    // Total match count, independent of the pagination window
    let total: i64 = match filter.like_pattern() {
        Some(pattern) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM bands WHERE name LIKE ? ESCAPE '\\'")
                .bind(pattern)
                .fetch_one(&state.db)
                .await
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM bands")
                .fetch_one(&state.db)
                .await
        }
    }
    .map_err(ItemsError::Database)?;

    // Page fetch with a deterministic sort key for stable pagination
    let items: Vec<BandRecord> = match filter.like_pattern() {
        Some(pattern) => {
            sqlx::query_as(
                "SELECT guid, name, country, genre, status
                 FROM bands
                 WHERE name LIKE ? ESCAPE '\\'
                 ORDER BY name COLLATE NOCASE ASC, guid ASC
                 LIMIT ? OFFSET ?",
            )
            .bind(pattern)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&state.db)
            .await
        }
        None => {
            sqlx::query_as(
                "SELECT guid, name, country, genre, status
                 FROM bands
                 ORDER BY name COLLATE NOCASE ASC, guid ASC
                 LIMIT ? OFFSET ?",
            )
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&state.db)
            .await
        }
    }
    .map_err(ItemsError::Database)?;

    Ok(Json(ItemsResponse { items, total }))
}

/// Listing API errors
#[derive(Debug)]
pub enum ItemsError {
    Database(sqlx::Error),
}

impl IntoResponse for ItemsError {
    fn into_response(self) -> Response {
        match self {
            ItemsError::Database(e) => {
                // Detail stays in the server log; the client gets a fixed
                // generic message.
                error!("Listing query failed: {}", e);
                let body = Json(json!({
                    "message": "Internal Server Error",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
