use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lobby_domain_error::LobbyDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameCategory {
    Slots,
    Poker,
    CrashGames,
    LiveCasino,
}

impl GameCategory {
    /// Lobby display order.
    pub const ALL: [GameCategory; 4] = [
        Self::Slots,
        Self::Poker,
        Self::CrashGames,
        Self::LiveCasino,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slots => "Slots",
            Self::Poker => "Poker",
            Self::CrashGames => "Crash Games",
            Self::LiveCasino => "Live Casino",
        }
    }
}

impl FromStr for GameCategory {
    type Err = LobbyDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Slots" => Ok(Self::Slots),
            "Poker" => Ok(Self::Poker),
            "Crash Games" => Ok(Self::CrashGames),
            "Live Casino" => Ok(Self::LiveCasino),
            other => Err(LobbyDomainError::UnknownCategory(other.to_string())),
        }
    }
}
