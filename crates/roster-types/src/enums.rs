//! Enumeration types for the roster service.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Lineup status of a player within its roster.
///
/// Exactly one of the two values is ever valid. New players and players
/// moved to another roster are always [`PlayerStatus::Benched`]; only a swap
/// makes a player [`PlayerStatus::Active`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum PlayerStatus {
    /// Currently eligible to play.
    Active,
    /// On the roster but not currently playing.
    #[default]
    Benched,
}

impl PlayerStatus {
    /// The canonical string stored in the `players.status` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Benched => "benched",
        }
    }

    /// The status a swap moves this status to.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Active => Self::Benched,
            Self::Benched => Self::Active,
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the closed `active`/`benched` set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for PlayerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "benched" => Ok(Self::Benched),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// Deserialize an optional status where the empty string means "absent".
///
/// Sparse updates encode "leave unchanged" as the zero value, which for a
/// status is `""`.
pub(crate) fn empty_status_as_none<'de, D>(deserializer: D) -> Result<Option<PlayerStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
