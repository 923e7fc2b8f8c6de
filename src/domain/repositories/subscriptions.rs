use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::value_objects::subscriptions::SubscriptionWithInfluencerModel;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// All subscriptions of the subscriber, joined with the influencer's
    /// public profile, newest first.
    async fn list_for_subscriber(
        &self,
        subscriber_id: Uuid,
    ) -> Result<Vec<SubscriptionWithInfluencerModel>>;

    /// Sets `status = 'cancelled'` on the row matching the id, but only if
    /// it is currently active. Returns the number of rows affected.
    async fn cancel(&self, subscriber_id: Uuid, subscription_id: Uuid) -> Result<usize>;
}
