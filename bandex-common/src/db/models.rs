//! Database models

use serde::{Deserialize, Serialize};

/// One band in the catalog.
///
/// `status` is free text as found in the source data (observed values:
/// "active", "split-up", "on hold", "changed name", "unknown") and is
/// deliberately not an enum.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BandRecord {
    /// Store-assigned identifier, unique and immutable
    pub guid: String,
    pub name: String,
    pub country: String,
    pub genre: String,
    pub status: String,
}
