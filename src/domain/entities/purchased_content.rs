use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::purchased_content;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = purchased_content)]
pub struct PurchasedContentEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub created_at: DateTime<Utc>,
}
