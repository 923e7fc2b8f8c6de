use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::domain::repositories::purchased_content::PurchasedContentRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad, repositories::purchased_content::PurchasedContentPostgres,
};
use crate::usecases::purchased_content::PurchasedContentUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let purchased_content_repository = PurchasedContentPostgres::new(Arc::clone(&db_pool));
    let purchased_content_usecase =
        PurchasedContentUseCase::new(Arc::new(purchased_content_repository));

    Router::new()
        .route("/", get(list_purchased_content::<PurchasedContentPostgres>))
        .with_state(Arc::new(purchased_content_usecase))
}

pub async fn list_purchased_content<T>(
    State(purchased_content_usecase): State<Arc<PurchasedContentUseCase<T>>>,
    AuthUser { user_id, .. }: AuthUser,
) -> impl IntoResponse
where
    T: PurchasedContentRepository + Send + Sync,
{
    info!(%user_id, "purchased content router: list request received");
    match purchased_content_usecase.list_purchased_cards(user_id).await {
        Ok(cards) => Json(cards).into_response(),
        Err(err) => {
            error!(%user_id, error = ?err, "purchased content router: list failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response()
        }
    }
}
