use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::value_objects::purchased_content::PurchasedRecord;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchasedContentRepository: Send + Sync {
    /// Purchase junction rows of the user, left-joined through content and
    /// the influencer profile chain, newest purchase first. Missing join
    /// levels surface as `None` in the nested record.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PurchasedRecord>>;
}
