//! Human readable game constants.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::ChallengerTypeParseError;

/// Matchmaking queue ids and their display names.
pub const MATCH_MAKING_QUEUES: &[(u16, &str)] = &[
    (2, "Normal 5v5 Blind Pick"),
    (4, "Ranked Solo 5v5"),
    (7, "Coop vs AI 5v5"),
    (8, "Normal 3v3"),
    (14, "Normal 5v5 Draft Pick"),
    (16, "Dominion 5v5 Blind Pick"),
    (17, "Dominion 5v5 Draft Pick"),
    (25, "Dominion Coop vs AI"),
    (41, "Ranked Team 3v3"),
    (42, "Ranked Team 5v5"),
    (52, "Twisted Treeline Coop vs AI"),
    (65, "ARAM"),
    (67, "ARAM Coop vs AI"),
    (70, "One for All 5v5"),
    (72, "Snowdown Showdown 1v1"),
    (73, "Snowdown Showdown 2v2"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapName {
    pub name: &'static str,
    pub notes: &'static str,
}

pub const MAP_NAMES: &[(u16, MapName)] = &[
    (1, MapName { name: "Summoner's Rift", notes: "Summer Variant" }),
    (2, MapName { name: "Summoner's Rift", notes: "Autumn Variant" }),
    (3, MapName { name: "The Proving Grounds", notes: "Tutorial Map" }),
    (4, MapName { name: "Twisted Treeline", notes: "Original Version" }),
    (8, MapName { name: "The Crystal Scar", notes: "Dominion Map" }),
    (10, MapName { name: "Twisted Treeline", notes: "Current Version" }),
    (12, MapName { name: "Howling Abyss", notes: "ARAM Map" }),
];

pub fn queue_name(queue_id: u16) -> Option<&'static str> {
    MATCH_MAKING_QUEUES
        .iter()
        .find(|(id, _)| *id == queue_id)
        .map(|(_, name)| *name)
}

pub fn map_name(map_id: u16) -> Option<MapName> {
    MAP_NAMES
        .iter()
        .find(|(id, _)| *id == map_id)
        .map(|(_, map)| *map)
}

/// Queue types accepted by the challenger league endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengerType {
    #[default]
    RankedSolo5x5,
    RankedTeam3x3,
    RankedTeam5x5,
}

impl ChallengerType {
    pub const ALL: [ChallengerType; 3] = [
        ChallengerType::RankedSolo5x5,
        ChallengerType::RankedTeam3x3,
        ChallengerType::RankedTeam5x5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengerType::RankedSolo5x5 => "RANKED_SOLO_5X5",
            ChallengerType::RankedTeam3x3 => "RANKED_TEAM_3X3",
            ChallengerType::RankedTeam5x5 => "RANKED_TEAM_5X5",
        }
    }

    /// Look a type up by its position in [`ChallengerType::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ChallengerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengerType {
    type Err = ChallengerTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ChallengerTypeParseError(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChallengerTypeParseError(s.to_string()))
    }
}
