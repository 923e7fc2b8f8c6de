use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::subscriptions::SubscriptionRepository,
    value_objects::subscriptions::SubscriptionWithInfluencerModel,
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("no active subscription to cancel")]
    SubscriptionNotActive,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::SubscriptionNotActive => StatusCode::NOT_FOUND,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionError>;

pub struct SubscriptionUseCase<T>
where
    T: SubscriptionRepository + Send + Sync,
{
    subscription_repo: Arc<T>,
}

impl<T> SubscriptionUseCase<T>
where
    T: SubscriptionRepository + Send + Sync,
{
    pub fn new(subscription_repo: Arc<T>) -> Self {
        Self { subscription_repo }
    }

    /// Full subscription history of the subscriber, newest first. The whole
    /// result set is returned and partitioned client-side; there is no
    /// pagination.
    pub async fn list_subscriptions(
        &self,
        subscriber_id: Uuid,
    ) -> UseCaseResult<Vec<SubscriptionWithInfluencerModel>> {
        info!(%subscriber_id, "subscriptions: listing for subscriber");
        let subscriptions = self
            .subscription_repo
            .list_for_subscriber(subscriber_id)
            .await
            .map_err(|err| {
                error!(
                    %subscriber_id,
                    db_error = ?err,
                    "subscriptions: failed to list subscriptions"
                );
                SubscriptionError::Internal(err)
            })?;
        let subscription_count = subscriptions.len();
        info!(%subscriber_id, subscription_count, "subscriptions: loaded");
        Ok(subscriptions)
    }

    /// The single permitted status transition: `active -> cancelled`. The
    /// repository matches on the current status, so a row that is already
    /// cancelled or expired reports zero affected rows.
    pub async fn cancel_subscription(
        &self,
        subscriber_id: Uuid,
        subscription_id: Uuid,
    ) -> UseCaseResult<()> {
        info!(%subscriber_id, %subscription_id, "subscriptions: cancel requested");
        let affected = self
            .subscription_repo
            .cancel(subscriber_id, subscription_id)
            .await
            .map_err(|err| {
                error!(
                    %subscriber_id,
                    %subscription_id,
                    db_error = ?err,
                    "subscriptions: cancel write failed"
                );
                SubscriptionError::Internal(err)
            })?;

        if affected == 0 {
            let err = SubscriptionError::SubscriptionNotActive;
            warn!(
                %subscriber_id,
                %subscription_id,
                status = err.status_code().as_u16(),
                "subscriptions: no active row matched cancel"
            );
            return Err(err);
        }

        info!(%subscriber_id, %subscription_id, "subscriptions: cancelled");
        Ok(())
    }
}
