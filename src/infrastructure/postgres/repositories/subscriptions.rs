use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*, update};
use uuid::Uuid;

use crate::domain::{
    entities::{profiles::ProfileEntity, subscriptions::SubscriptionEntity},
    repositories::subscriptions::SubscriptionRepository,
    value_objects::{
        enums::subscription_statuses::SubscriptionStatus,
        subscriptions::{InfluencerPublicProfile, SubscriptionWithInfluencerModel},
    },
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{influencer_profiles, profiles, subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn list_for_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> Result<Vec<SubscriptionWithInfluencerModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = subscriptions::table
            .inner_join(influencer_profiles::table.inner_join(profiles::table))
            .filter(subscriptions::subscriber_id.eq(subscriber_id))
            .order(subscriptions::created_at.desc())
            .select((SubscriptionEntity::as_select(), ProfileEntity::as_select()))
            .load::<(SubscriptionEntity, ProfileEntity)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(entity, profile)| SubscriptionWithInfluencerModel {
                id: entity.id,
                influencer_id: entity.influencer_id,
                status: SubscriptionStatus::from_str(&entity.status),
                price_paid: entity.price_paid,
                started_at: entity.started_at,
                expires_at: entity.expires_at,
                influencer: InfluencerPublicProfile {
                    username: profile.username,
                    full_name: profile.full_name,
                    avatar_url: profile.avatar_url,
                },
            })
            .collect())
    }

    async fn cancel(&self, subscriber_id: Uuid, subscription_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Matching on the current status makes `active -> cancelled` the
        // only transition this statement can ever perform.
        let affected = update(subscriptions::table)
            .filter(subscriptions::id.eq(subscription_id))
            .filter(subscriptions::subscriber_id.eq(subscriber_id))
            .filter(subscriptions::status.eq(SubscriptionStatus::Active.to_string()))
            .set(subscriptions::status.eq(SubscriptionStatus::Cancelled.to_string()))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
