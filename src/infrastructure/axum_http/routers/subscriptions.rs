use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::subscriptions::SubscriptionPostgres,
};
use crate::usecases::subscriptions::{SubscriptionError, SubscriptionUseCase};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let subscription_usecase = SubscriptionUseCase::new(Arc::new(subscription_repository));

    Router::new()
        .route("/", get(list_subscriptions::<SubscriptionPostgres>))
        .route(
            "/:subscription_id/cancel",
            post(cancel_subscription::<SubscriptionPostgres>),
        )
        .with_state(Arc::new(subscription_usecase))
}

pub async fn list_subscriptions<T>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    T: SubscriptionRepository + Send + Sync,
{
    info!(%user_id, "subscriptions router: list request received");
    match subscription_usecase.list_subscriptions(user_id).await {
        Ok(subscriptions) => Json(subscriptions).into_response(),
        Err(err) => error_response(err),
    }
}

/// Internal failures are already logged by the usecase; the wire only ever
/// sees a generic 500 body.
fn error_response(err: SubscriptionError) -> Response {
    match err {
        SubscriptionError::SubscriptionNotActive => {
            (err.status_code(), err.to_string()).into_response()
        }
        SubscriptionError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
            .into_response(),
    }
}

pub async fn cancel_subscription<T>(
    State(subscription_usecase): State<Arc<SubscriptionUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    T: SubscriptionRepository + Send + Sync,
{
    info!(%user_id, %subscription_id, "subscriptions router: cancel request received");
    match subscription_usecase
        .cancel_subscription(user_id, subscription_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
