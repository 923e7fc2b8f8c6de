use anyhow::Result;
use tracing::debug;

use crate::domain::repositories::purchased_content::PurchasedContentRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::enums::dashboard_tabs::DashboardTab;
use crate::domain::value_objects::profiles::{AuthSession, AvatarDisplay, avatar_display};
use crate::domain::value_objects::purchased_content::PurchasedContentCard;
use crate::domain::value_objects::subscriptions::SubscriptionWithInfluencerModel;
use crate::usecases::purchased_content::PurchasedContentUseCase;
use crate::usecases::subscriptions::{SubscriptionUseCase, UseCaseResult};

pub const SUBSCRIPTIONS_ERROR_PREFIX: &str = "Failed to load subscriptions: ";
pub const PURCHASED_ERROR_PREFIX: &str = "Failed to load purchased content: ";

/// Header block above the tabs, derived from the injected session.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    pub display_name: String,
    pub handle: String,
    pub bio: Option<String>,
    pub avatar: AvatarDisplay,
}

/// Content of the single active tab. Discovery is an external collaborator
/// mounted as a black box, so it carries no data of its own.
#[derive(Debug)]
pub enum TabContent<'a> {
    Subscriptions {
        loading: bool,
        items: &'a [SubscriptionWithInfluencerModel],
    },
    Purchased {
        loading: bool,
        items: &'a [PurchasedContentCard],
    },
    Discover,
}

/// View model for the subscriber dashboard: profile header, three tabs, the
/// two data sections with independent loading flags, and one shared error
/// slot (a later failure overwrites an earlier message).
pub struct DashboardView<S, P>
where
    S: SubscriptionRepository + Send + Sync,
    P: PurchasedContentRepository + Send + Sync,
{
    subscription_usecase: SubscriptionUseCase<S>,
    purchased_usecase: PurchasedContentUseCase<P>,
    session: AuthSession,
    subscriptions: Vec<SubscriptionWithInfluencerModel>,
    purchased: Vec<PurchasedContentCard>,
    loading_subscriptions: bool,
    loading_purchased: bool,
    error: Option<String>,
    active_tab: DashboardTab,
    profile_editor_open: bool,
    subscriptions_generation: u64,
    purchased_generation: u64,
}

impl<S, P> DashboardView<S, P>
where
    S: SubscriptionRepository + Send + Sync,
    P: PurchasedContentRepository + Send + Sync,
{
    pub fn new(
        subscription_usecase: SubscriptionUseCase<S>,
        purchased_usecase: PurchasedContentUseCase<P>,
        session: AuthSession,
    ) -> Self {
        Self {
            subscription_usecase,
            purchased_usecase,
            session,
            subscriptions: Vec::new(),
            purchased: Vec::new(),
            loading_subscriptions: true,
            loading_purchased: true,
            error: None,
            active_tab: DashboardTab::default(),
            profile_editor_open: false,
            subscriptions_generation: 0,
            purchased_generation: 0,
        }
    }

    pub fn set_session(&mut self, session: AuthSession) {
        self.session = session;
    }

    /// Runs both section reads concurrently. Each section clears its own
    /// loading flag in its own completion handler, regardless of how the
    /// other fared; a failed section writes into the shared error slot and
    /// leaves that section's data untouched.
    pub async fn load(&mut self) {
        let Some(user_id) = self.session.profile().map(|profile| profile.id) else {
            return;
        };
        let subscriptions_generation = self.begin_subscriptions_load();
        let purchased_generation = self.begin_purchased_load();

        let (subscriptions, purchased) = tokio::join!(
            self.subscription_usecase.list_subscriptions(user_id),
            self.purchased_usecase.list_purchased_cards(user_id),
        );

        self.apply_subscriptions_load(subscriptions_generation, subscriptions);
        self.apply_purchased_load(purchased_generation, purchased);
    }

    fn begin_subscriptions_load(&mut self) -> u64 {
        self.subscriptions_generation += 1;
        self.loading_subscriptions = true;
        self.subscriptions_generation
    }

    fn begin_purchased_load(&mut self) -> u64 {
        self.purchased_generation += 1;
        self.loading_purchased = true;
        self.purchased_generation
    }

    fn apply_subscriptions_load(
        &mut self,
        generation: u64,
        result: UseCaseResult<Vec<SubscriptionWithInfluencerModel>>,
    ) {
        if generation != self.subscriptions_generation {
            debug!(
                stale_generation = generation,
                "dashboard: discarding stale subscriptions completion"
            );
            return;
        }
        match result {
            Ok(subscriptions) => self.subscriptions = subscriptions,
            Err(err) => self.error = Some(format!("{}{}", SUBSCRIPTIONS_ERROR_PREFIX, err)),
        }
        self.loading_subscriptions = false;
    }

    fn apply_purchased_load(
        &mut self,
        generation: u64,
        result: Result<Vec<PurchasedContentCard>>,
    ) {
        if generation != self.purchased_generation {
            debug!(
                stale_generation = generation,
                "dashboard: discarding stale purchased-content completion"
            );
            return;
        }
        match result {
            Ok(purchased) => self.purchased = purchased,
            Err(err) => self.error = Some(format!("{}{}", PURCHASED_ERROR_PREFIX, err)),
        }
        self.loading_purchased = false;
    }

    /// Pure local state; never triggers a fetch.
    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    /// Exactly one tab's content at a time.
    pub fn tab_content(&self) -> TabContent<'_> {
        match self.active_tab {
            DashboardTab::Subscriptions => TabContent::Subscriptions {
                loading: self.loading_subscriptions,
                items: &self.subscriptions,
            },
            DashboardTab::Purchased => TabContent::Purchased {
                loading: self.loading_purchased,
                items: &self.purchased,
            },
            DashboardTab::Discover => TabContent::Discover,
        }
    }

    pub fn profile_header(&self) -> Option<ProfileHeader> {
        self.session.profile().map(|profile| ProfileHeader {
            display_name: profile.display_name(),
            handle: profile.handle(),
            bio: profile.bio.clone(),
            avatar: avatar_display(profile.avatar_url.as_deref(), &profile.username),
        })
    }

    pub fn open_profile_editor(&mut self) {
        self.profile_editor_open = true;
    }

    /// `onClose` contract of the profile-edit collaborator.
    pub fn handle_editor_close(&mut self) {
        self.profile_editor_open = false;
    }

    /// `onSuccess` contract: only clears the flag. The session collaborator
    /// refreshes the profile; no fetch happens here.
    pub fn handle_editor_success(&mut self) {
        self.profile_editor_open = false;
    }

    pub fn is_profile_editor_open(&self) -> bool {
        self.profile_editor_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading_subscriptions(&self) -> bool {
        self.loading_subscriptions
    }

    pub fn is_loading_purchased(&self) -> bool {
        self.loading_purchased
    }

    pub fn subscriptions(&self) -> &[SubscriptionWithInfluencerModel] {
        &self.subscriptions
    }

    pub fn purchased(&self) -> &[PurchasedContentCard] {
        &self.purchased
    }
}
