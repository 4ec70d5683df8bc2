use chrono::{DateTime, FixedOffset, Offset, Utc};
use sqlx::FromRow;

/// Offset used for `created_at` (Asia/Tokyo, no daylight saving).
pub const CREATED_AT_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<FixedOffset>,
}

/// Current instant in the fixed post timezone, taken per insert.
pub fn creation_time() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(CREATED_AT_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset)
}
