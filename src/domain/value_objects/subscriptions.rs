use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;
use crate::domain::value_objects::profiles::{AvatarDisplay, avatar_display};

/// Minimal projection of the influencer's public profile, joined into a
/// subscription row so a card renders without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfluencerPublicProfile {
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl InfluencerPublicProfile {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(full_name) => full_name.clone(),
            None => format!("@{}", self.username),
        }
    }

    pub fn avatar(&self) -> AvatarDisplay {
        avatar_display(self.avatar_url.as_deref(), &self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionWithInfluencerModel {
    pub id: Uuid,
    pub influencer_id: Uuid,
    pub status: SubscriptionStatus,
    pub price_paid: f64,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub influencer: InfluencerPublicProfile,
}

/// The two display buckets, derived purely from `status` at render time.
/// Relative order within each bucket is the order of the source list.
#[derive(Debug, Default)]
pub struct SubscriptionPartition<'a> {
    pub active: Vec<&'a SubscriptionWithInfluencerModel>,
    pub inactive: Vec<&'a SubscriptionWithInfluencerModel>,
}

pub fn partition_by_status(
    subscriptions: &[SubscriptionWithInfluencerModel],
) -> SubscriptionPartition<'_> {
    let mut partition = SubscriptionPartition::default();
    for subscription in subscriptions {
        if subscription.status.is_active() {
            partition.active.push(subscription);
        } else {
            partition.inactive.push(subscription);
        }
    }
    partition
}
