use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attribution shown when any level of the purchase -> content ->
/// influencer profile -> public profile chain is missing.
pub const UNKNOWN_ATTRIBUTION: &str = "Unknown";

/// Public-profile level of the attribution chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributionProfile {
    pub username: String,
}

/// Influencer-profile level of the attribution chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributionInfluencer {
    pub profile: Option<AttributionProfile>,
}

/// A purchased content item as loaded through the purchase junction. Every
/// join level that can be missing is kept as an `Option` so attribution is
/// resolved by an explicit, total projection instead of null-propagation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchasedContentDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub total_views: i32,
    pub likes_count: i32,
    pub influencer: Option<AttributionInfluencer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchasedRecord {
    pub purchase_id: Uuid,
    pub content: Option<PurchasedContentDetails>,
}

/// Flattened card handed to the purchased-content grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchasedContentCard {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub total_views: i32,
    pub likes_count: i32,
    pub influencer_username: String,
}

/// Total projection from a purchased record to its attribution username.
/// Enumerates every point where the joined chain can be broken and falls
/// back to [`UNKNOWN_ATTRIBUTION`].
pub fn extract_attribution(record: &PurchasedRecord) -> String {
    let content = match &record.content {
        Some(content) => content,
        None => return UNKNOWN_ATTRIBUTION.to_string(),
    };
    let influencer = match &content.influencer {
        Some(influencer) => influencer,
        None => return UNKNOWN_ATTRIBUTION.to_string(),
    };
    match &influencer.profile {
        Some(profile) => profile.username.clone(),
        None => UNKNOWN_ATTRIBUTION.to_string(),
    }
}

impl PurchasedRecord {
    /// Flattens the record into a display card. Junction rows whose content
    /// row is missing have nothing to show and yield `None`.
    pub fn into_card(self) -> Option<PurchasedContentCard> {
        let influencer_username = extract_attribution(&self);
        let content = self.content?;
        Some(PurchasedContentCard {
            id: content.id,
            title: content.title,
            description: content.description,
            media_url: content.media_url,
            thumbnail_url: content.thumbnail_url,
            total_views: content.total_views,
            likes_count: content.likes_count,
            influencer_username,
        })
    }
}
