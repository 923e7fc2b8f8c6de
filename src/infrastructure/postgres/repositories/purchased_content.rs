use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use uuid::Uuid;

use crate::domain::{
    entities::{
        content::ContentEntity, profiles::InfluencerProfileEntity,
        purchased_content::PurchasedContentEntity,
    },
    repositories::purchased_content::PurchasedContentRepository,
    value_objects::purchased_content::{
        AttributionInfluencer, AttributionProfile, PurchasedContentDetails, PurchasedRecord,
    },
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{content, influencer_profiles, profiles, purchased_content},
};

pub struct PurchasedContentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PurchasedContentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PurchasedContentRepository for PurchasedContentPostgres {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PurchasedRecord>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Left joins all the way down so a broken attribution chain surfaces
        // as None at the level it broke instead of dropping the purchase.
        let rows = purchased_content::table
            .left_join(
                content::table
                    .left_join(influencer_profiles::table.left_join(profiles::table)),
            )
            .filter(purchased_content::user_id.eq(user_id))
            .order(purchased_content::created_at.desc())
            .select((
                PurchasedContentEntity::as_select(),
                Option::<ContentEntity>::as_select(),
                Option::<InfluencerProfileEntity>::as_select(),
                profiles::username.nullable(),
            ))
            .load::<(
                PurchasedContentEntity,
                Option<ContentEntity>,
                Option<InfluencerProfileEntity>,
                Option<String>,
            )>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(purchase, content, influencer_profile, username)| PurchasedRecord {
                purchase_id: purchase.id,
                content: content.map(|content| PurchasedContentDetails {
                    id: content.id,
                    title: content.title,
                    description: content.description,
                    media_url: content.media_url,
                    thumbnail_url: content.thumbnail_url,
                    total_views: content.total_views,
                    likes_count: content.likes_count,
                    influencer: influencer_profile.map(|_| AttributionInfluencer {
                        profile: username.map(|username| AttributionProfile { username }),
                    }),
                }),
            })
            .collect())
    }
}
