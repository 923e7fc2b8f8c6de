use tracing::debug;
use uuid::Uuid;

use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::profiles::AuthSession;
use crate::domain::value_objects::subscriptions::{
    SubscriptionPartition, SubscriptionWithInfluencerModel, partition_by_status,
};
use crate::usecases::subscriptions::{SubscriptionUseCase, UseCaseResult};

pub const CANCEL_CONFIRM_PROMPT: &str = "Are you sure you want to cancel this subscription?";
pub const EMPTY_STATE_MESSAGE: &str = "No subscriptions yet";

/// What the subscription list renders: a loading indicator, the empty-state
/// message (no section headers), or the two status partitions.
#[derive(Debug)]
pub enum SubscriptionListBody<'a> {
    Loading,
    Empty { message: &'static str },
    Sections(SubscriptionPartition<'a>),
}

/// View model for the subscriber's "my subscriptions" screen. Owns its view
/// state exclusively; the session is injected explicitly and `Loading` acts
/// as the not-yet-ready sentinel.
pub struct SubscriptionListView<T>
where
    T: SubscriptionRepository + Send + Sync,
{
    usecase: SubscriptionUseCase<T>,
    session: AuthSession,
    subscriptions: Vec<SubscriptionWithInfluencerModel>,
    loading: bool,
    error: Option<String>,
    pending_cancel: Option<Uuid>,
    generation: u64,
    on_view_profile: Option<Box<dyn Fn(Uuid) + Send + Sync>>,
}

impl<T> SubscriptionListView<T>
where
    T: SubscriptionRepository + Send + Sync,
{
    pub fn new(usecase: SubscriptionUseCase<T>, session: AuthSession) -> Self {
        Self {
            usecase,
            session,
            subscriptions: Vec::new(),
            loading: true,
            error: None,
            pending_cancel: None,
            generation: 0,
            on_view_profile: None,
        }
    }

    /// Card activation delegates navigation to this callback; the view never
    /// navigates itself.
    pub fn set_on_view_profile(&mut self, callback: impl Fn(Uuid) + Send + Sync + 'static) {
        self.on_view_profile = Some(Box::new(callback));
    }

    /// Identity change. Callers re-run `load` afterwards, mirroring a
    /// fetch-on-identity-change effect.
    pub fn set_session(&mut self, session: AuthSession) {
        self.session = session;
    }

    /// Fetches the full subscription history. No-op while the session is
    /// still loading. A read failure leaves the list empty with loading
    /// cleared and surfaces nothing.
    pub async fn load(&mut self) {
        let Some(subscriber_id) = self.session.profile().map(|profile| profile.id) else {
            return;
        };
        let generation = self.begin_load();
        let result = self.usecase.list_subscriptions(subscriber_id).await;
        self.apply_load(generation, result);
    }

    fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    fn apply_load(
        &mut self,
        generation: u64,
        result: UseCaseResult<Vec<SubscriptionWithInfluencerModel>>,
    ) {
        if generation != self.generation {
            debug!(
                stale_generation = generation,
                current_generation = self.generation,
                "subscription list: discarding stale load completion"
            );
            return;
        }
        match result {
            Ok(subscriptions) => self.subscriptions = subscriptions,
            Err(_) => self.subscriptions.clear(),
        }
        self.loading = false;
    }

    /// First phase of a cancel: arms the pending cancel and returns the
    /// confirmation prompt. Only subscriptions in the active partition can
    /// be cancelled; anything else is ignored.
    pub fn request_cancel(&mut self, subscription_id: Uuid) -> Option<&'static str> {
        let cancellable = self
            .subscriptions
            .iter()
            .any(|subscription| subscription.id == subscription_id && subscription.status.is_active());
        if !cancellable {
            return None;
        }
        self.pending_cancel = Some(subscription_id);
        Some(CANCEL_CONFIRM_PROMPT)
    }

    /// The user declined the confirmation prompt: nothing is written.
    pub fn decline_cancel(&mut self) {
        self.pending_cancel = None;
    }

    /// Second phase: issues the `active -> cancelled` write and re-runs the
    /// load. A failed write leaves the list unchanged and surfaces an error
    /// message instead of failing silently.
    pub async fn confirm_cancel(&mut self) {
        let Some(subscription_id) = self.pending_cancel.take() else {
            return;
        };
        let Some(subscriber_id) = self.session.profile().map(|profile| profile.id) else {
            return;
        };
        let result = self
            .usecase
            .cancel_subscription(subscriber_id, subscription_id)
            .await;
        match result {
            Ok(()) => {
                self.error = None;
                self.load().await;
            }
            Err(err) => {
                self.error = Some(format!("Failed to cancel subscription: {}", err));
            }
        }
    }

    /// Invokes `on_view_profile` with the influencer behind the card, for
    /// cards in either partition.
    pub fn activate_card(&self, subscription_id: Uuid) {
        let Some(callback) = &self.on_view_profile else {
            return;
        };
        if let Some(subscription) = self
            .subscriptions
            .iter()
            .find(|subscription| subscription.id == subscription_id)
        {
            callback(subscription.influencer_id);
        }
    }

    pub fn body(&self) -> SubscriptionListBody<'_> {
        if self.loading {
            return SubscriptionListBody::Loading;
        }
        if self.subscriptions.is_empty() {
            return SubscriptionListBody::Empty {
                message: EMPTY_STATE_MESSAGE,
            };
        }
        SubscriptionListBody::Sections(partition_by_status(&self.subscriptions))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_cancel(&self) -> Option<Uuid> {
        self.pending_cancel
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn subscriptions(&self) -> &[SubscriptionWithInfluencerModel] {
        &self.subscriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::subscriptions::MockSubscriptionRepository;
    use crate::domain::value_objects::enums::subscription_statuses::SubscriptionStatus;
    use crate::domain::value_objects::profiles::ProfileModel;
    use crate::domain::value_objects::subscriptions::InfluencerPublicProfile;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    fn signed_in() -> AuthSession {
        AuthSession::SignedIn(ProfileModel {
            id: Uuid::new_v4(),
            username: "joao".to_string(),
            full_name: None,
            avatar_url: None,
            bio: None,
        })
    }

    fn sample_subscription(
        id: Uuid,
        username: &str,
        status: SubscriptionStatus,
    ) -> SubscriptionWithInfluencerModel {
        let now = Utc::now();
        SubscriptionWithInfluencerModel {
            id,
            influencer_id: Uuid::new_v4(),
            status,
            price_paid: 29.9,
            started_at: now - Duration::days(1),
            expires_at: now + Duration::days(29),
            influencer: InfluencerPublicProfile {
                username: username.to_string(),
                full_name: None,
                avatar_url: None,
            },
        }
    }

    fn view_with_repo(
        repo: MockSubscriptionRepository,
        session: AuthSession,
    ) -> SubscriptionListView<MockSubscriptionRepository> {
        SubscriptionListView::new(SubscriptionUseCase::new(Arc::new(repo)), session)
    }

    #[tokio::test]
    async fn load_is_a_noop_while_session_is_loading() {
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(0);

        let mut view = view_with_repo(repo, AuthSession::Loading);
        view.load().await;

        assert!(view.is_loading());
    }

    #[tokio::test]
    async fn empty_history_renders_the_empty_state() {
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        match view.body() {
            SubscriptionListBody::Empty { message } => assert_eq!(message, EMPTY_STATE_MESSAGE),
            other => panic!("expected empty state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_partitions_active_and_inactive() {
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(1).returning(|_| {
            Ok(vec![
                sample_subscription(Uuid::new_v4(), "ana", SubscriptionStatus::Active),
                sample_subscription(Uuid::new_v4(), "bia", SubscriptionStatus::Active),
                sample_subscription(Uuid::new_v4(), "carla", SubscriptionStatus::Cancelled),
                sample_subscription(Uuid::new_v4(), "dani", SubscriptionStatus::Expired),
            ])
        });

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        match view.body() {
            SubscriptionListBody::Sections(partition) => {
                assert_eq!(partition.active.len(), 2);
                assert_eq!(partition.inactive.len(), 2);
                assert_eq!(partition.active[0].influencer.username, "ana");
                assert_eq!(partition.inactive[0].influencer.username, "carla");
            }
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_read_leaves_an_empty_list_with_loading_cleared() {
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        assert!(!view.is_loading());
        assert!(view.subscriptions().is_empty());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn declined_cancel_never_writes() {
        let subscription_id = Uuid::new_v4();
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(1).returning(move |_| {
            Ok(vec![sample_subscription(
                subscription_id,
                "ana",
                SubscriptionStatus::Active,
            )])
        });
        repo.expect_cancel().times(0);

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        let prompt = view.request_cancel(subscription_id);
        assert_eq!(prompt, Some(CANCEL_CONFIRM_PROMPT));
        assert_eq!(view.pending_cancel(), Some(subscription_id));

        view.decline_cancel();
        assert_eq!(view.pending_cancel(), None);

        // Confirming without a pending cancel is a no-op.
        view.confirm_cancel().await;
    }

    #[tokio::test]
    async fn inactive_subscriptions_cannot_be_cancelled() {
        let subscription_id = Uuid::new_v4();
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(1).returning(move |_| {
            Ok(vec![sample_subscription(
                subscription_id,
                "carla",
                SubscriptionStatus::Expired,
            )])
        });
        repo.expect_cancel().times(0);

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        assert_eq!(view.request_cancel(subscription_id), None);
        assert_eq!(view.pending_cancel(), None);
    }

    #[tokio::test]
    async fn confirmed_cancel_writes_and_reloads_into_the_inactive_partition() {
        let subscription_id = Uuid::new_v4();
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(1).returning(move |_| {
            Ok(vec![sample_subscription(
                subscription_id,
                "ana",
                SubscriptionStatus::Active,
            )])
        });
        repo.expect_cancel().times(1).returning(|_, _| Ok(1));
        repo.expect_list_for_subscriber().times(1).returning(move |_| {
            Ok(vec![sample_subscription(
                subscription_id,
                "ana",
                SubscriptionStatus::Cancelled,
            )])
        });

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        view.request_cancel(subscription_id)
            .expect("active subscription should be cancellable");
        view.confirm_cancel().await;

        match view.body() {
            SubscriptionListBody::Sections(partition) => {
                assert!(partition.active.is_empty());
                assert_eq!(partition.inactive.len(), 1);
                assert_eq!(partition.inactive[0].status.label(), "Cancelled");
            }
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_cancel_surfaces_an_error_and_keeps_the_list() {
        let subscription_id = Uuid::new_v4();
        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber().times(1).returning(move |_| {
            Ok(vec![sample_subscription(
                subscription_id,
                "ana",
                SubscriptionStatus::Active,
            )])
        });
        repo.expect_cancel()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("write failed")));

        let mut view = view_with_repo(repo, signed_in());
        view.load().await;

        view.request_cancel(subscription_id);
        view.confirm_cancel().await;

        assert!(view.error().is_some());
        assert_eq!(view.subscriptions().len(), 1);
        assert!(view.subscriptions()[0].status.is_active());
    }

    #[tokio::test]
    async fn stale_load_completions_are_discarded() {
        let repo = MockSubscriptionRepository::new();
        let mut view = view_with_repo(repo, signed_in());

        let first = view.begin_load();
        let second = view.begin_load();

        view.apply_load(
            first,
            Ok(vec![sample_subscription(
                Uuid::new_v4(),
                "stale",
                SubscriptionStatus::Active,
            )]),
        );
        assert!(view.is_loading());
        assert!(view.subscriptions().is_empty());

        view.apply_load(
            second,
            Ok(vec![sample_subscription(
                Uuid::new_v4(),
                "fresh",
                SubscriptionStatus::Active,
            )]),
        );
        assert!(!view.is_loading());
        assert_eq!(view.subscriptions()[0].influencer.username, "fresh");
    }

    #[tokio::test]
    async fn activating_a_card_delegates_the_influencer_id() {
        let subscription_id = Uuid::new_v4();
        let subscription =
            sample_subscription(subscription_id, "ana", SubscriptionStatus::Cancelled);
        let influencer_id = subscription.influencer_id;

        let mut repo = MockSubscriptionRepository::new();
        repo.expect_list_for_subscriber()
            .times(1)
            .returning(move |_| Ok(vec![subscription.clone()]));

        let mut view = view_with_repo(repo, signed_in());
        let seen = Arc::new(Mutex::new(None));
        let seen_by_callback = Arc::clone(&seen);
        view.set_on_view_profile(move |id| {
            *seen_by_callback.lock().unwrap() = Some(id);
        });

        view.load().await;
        view.activate_card(subscription_id);

        assert_eq!(*seen.lock().unwrap(), Some(influencer_id));
    }
}
