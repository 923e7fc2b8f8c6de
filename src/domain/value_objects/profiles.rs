use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile record of the authenticated subscriber, as handed over by the
/// session collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileModel {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

impl ProfileModel {
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(full_name) => full_name.clone(),
            None => format!("@{}", self.username),
        }
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

/// Explicitly injected session state. `Loading` is the "not yet loaded"
/// sentinel: view models treat it as "do nothing yet" instead of guessing
/// from missing fields.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSession {
    Loading,
    SignedIn(ProfileModel),
}

impl AuthSession {
    pub fn profile(&self) -> Option<&ProfileModel> {
        match self {
            AuthSession::Loading => None,
            AuthSession::SignedIn(profile) => Some(profile),
        }
    }
}

/// How an avatar slot is rendered: the hosted image when a URL is present,
/// otherwise a circular placeholder with the uppercased first character of
/// the username.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarDisplay {
    Image(String),
    Placeholder(char),
}

pub fn avatar_display(avatar_url: Option<&str>, username: &str) -> AvatarDisplay {
    match avatar_url {
        Some(url) => AvatarDisplay::Image(url.to_string()),
        None => {
            // `to_uppercase` rather than the ASCII variant so accented
            // initials ("ágata") uppercase too.
            let initial = username
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())
                .unwrap_or('?');
            AvatarDisplay::Placeholder(initial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> ProfileModel {
        ProfileModel {
            id: Uuid::new_v4(),
            username: "maria".to_string(),
            full_name: None,
            avatar_url: None,
            bio: None,
        }
    }

    #[test]
    fn missing_avatar_renders_uppercased_initial() {
        assert_eq!(avatar_display(None, "maria"), AvatarDisplay::Placeholder('M'));
    }

    #[test]
    fn accented_initial_is_uppercased() {
        assert_eq!(avatar_display(None, "ágata"), AvatarDisplay::Placeholder('Á'));
    }

    #[test]
    fn present_avatar_renders_image() {
        assert_eq!(
            avatar_display(Some("https://cdn.example/a.png"), "maria"),
            AvatarDisplay::Image("https://cdn.example/a.png".to_string())
        );
    }

    #[test]
    fn display_name_falls_back_to_handle() {
        let mut profile = sample_profile();
        assert_eq!(profile.display_name(), "@maria");

        profile.full_name = Some("Maria Silva".to_string());
        assert_eq!(profile.display_name(), "Maria Silva");
    }
}
