use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::content;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = content)]
pub struct ContentEntity {
    pub id: Uuid,
    pub influencer_profile_id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub total_views: i32,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
}
