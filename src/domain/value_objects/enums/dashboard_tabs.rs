use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The three dashboard sections. Exactly one is active at a time and
/// switching between them is pure local state.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Subscriptions,
    Purchased,
    Discover,
}

impl Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tab = match self {
            DashboardTab::Subscriptions => "subscriptions",
            DashboardTab::Purchased => "purchased",
            DashboardTab::Discover => "discover",
        };
        write!(f, "{}", tab)
    }
}
