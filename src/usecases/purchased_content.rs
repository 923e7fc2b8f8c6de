use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    repositories::purchased_content::PurchasedContentRepository,
    value_objects::purchased_content::{PurchasedContentCard, PurchasedRecord},
};

pub struct PurchasedContentUseCase<T>
where
    T: PurchasedContentRepository + Send + Sync,
{
    purchased_content_repo: Arc<T>,
}

impl<T> PurchasedContentUseCase<T>
where
    T: PurchasedContentRepository + Send + Sync,
{
    pub fn new(purchased_content_repo: Arc<T>) -> Self {
        Self {
            purchased_content_repo,
        }
    }

    /// Nested purchase records, newest purchase first.
    pub async fn list_purchased(&self, user_id: Uuid) -> Result<Vec<PurchasedRecord>> {
        info!(%user_id, "purchased content: listing for user");
        let records = self
            .purchased_content_repo
            .list_for_user(user_id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    db_error = ?err,
                    "purchased content: failed to list purchases"
                );
                err
            })?;
        let purchase_count = records.len();
        info!(%user_id, purchase_count, "purchased content: loaded");
        Ok(records)
    }

    /// Display cards: junction rows without a content row are dropped and
    /// attribution falls back to "Unknown" wherever the join chain breaks.
    pub async fn list_purchased_cards(&self, user_id: Uuid) -> Result<Vec<PurchasedContentCard>> {
        let records = self.list_purchased(user_id).await?;
        Ok(records
            .into_iter()
            .filter_map(PurchasedRecord::into_card)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::purchased_content::MockPurchasedContentRepository;
    use crate::domain::value_objects::purchased_content::{
        AttributionInfluencer, AttributionProfile, PurchasedContentDetails, UNKNOWN_ATTRIBUTION,
    };
    use mockall::predicate::eq;

    fn record_with_attribution(username: Option<&str>) -> PurchasedRecord {
        PurchasedRecord {
            purchase_id: Uuid::new_v4(),
            content: Some(PurchasedContentDetails {
                id: Uuid::new_v4(),
                title: "Vlog #12".to_string(),
                description: "Weekly vlog".to_string(),
                media_url: "https://cdn.example/vlog12.mp4".to_string(),
                thumbnail_url: Some("https://cdn.example/vlog12.jpg".to_string()),
                total_views: 512,
                likes_count: 80,
                influencer: Some(AttributionInfluencer {
                    profile: username.map(|username| AttributionProfile {
                        username: username.to_string(),
                    }),
                }),
            }),
        }
    }

    #[tokio::test]
    async fn cards_drop_records_without_content() {
        let user_id = Uuid::new_v4();
        let mut purchased_repo = MockPurchasedContentRepository::new();
        purchased_repo
            .expect_list_for_user()
            .with(eq(user_id))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    record_with_attribution(Some("maria")),
                    PurchasedRecord {
                        purchase_id: Uuid::new_v4(),
                        content: None,
                    },
                ])
            });

        let usecase = PurchasedContentUseCase::new(Arc::new(purchased_repo));
        let cards = usecase
            .list_purchased_cards(user_id)
            .await
            .expect("listing should succeed");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].influencer_username, "maria");
    }

    #[tokio::test]
    async fn cards_fall_back_to_unknown_attribution() {
        let mut purchased_repo = MockPurchasedContentRepository::new();
        purchased_repo
            .expect_list_for_user()
            .returning(|_| Ok(vec![record_with_attribution(None)]));

        let usecase = PurchasedContentUseCase::new(Arc::new(purchased_repo));
        let cards = usecase
            .list_purchased_cards(Uuid::new_v4())
            .await
            .expect("listing should succeed");

        assert_eq!(cards[0].influencer_username, UNKNOWN_ATTRIBUTION);
    }
}
