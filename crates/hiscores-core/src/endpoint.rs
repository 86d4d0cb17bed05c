use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::Endpoints;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, IntoStaticStr,
)]
pub enum AccountType {
    #[default]
    #[strum(serialize = "regular")]
    Regular,
    #[strum(serialize = "ironman")]
    Ironman,
}

impl AccountType {
    /// Guess the account type from the player name.
    ///
    /// Ironman accounts are served by a separate leaderboard. There is no way
    /// to ask upstream which one a name belongs to, so names containing "iron"
    /// (any case) are routed there.
    pub fn detect(player: &str) -> Self {
        if player.to_lowercase().contains("iron") {
            Self::Ironman
        } else {
            Self::Regular
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn endpoint<'a>(&self, endpoints: &'a Endpoints) -> &'a str {
        match self {
            Self::Regular => &endpoints.standard,
            Self::Ironman => &endpoints.ironman,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pick the leaderboard URL for a player.
pub fn select_endpoint<'a>(player: &str, endpoints: &'a Endpoints) -> &'a str {
    AccountType::detect(player).endpoint(endpoints)
}
