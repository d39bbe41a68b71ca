//! Opponent suggestions over a slice of completed matches.
//!
//! Every function here is a pure function of its input. Team identifiers are
//! compared by exact equality and returned lists are sorted so output is
//! stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::types::Match;

/// Played and unplayed opponents for a single team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSchedule {
    pub team: String,
    pub played: Vec<String>,
    pub unplayed: Vec<String>,
}

impl TeamSchedule {
    pub fn display(&self) -> String {
        format!(
            "{} - Played: {} [{}], Unplayed: {} [{}]",
            self.team,
            self.played.len(),
            self.played.join(", "),
            self.unplayed.len(),
            self.unplayed.join(", ")
        )
    }
}

/// Every distinct team that appears on either side of any match.
pub fn get_teams(matches: &[Match]) -> HashSet<&str> {
    let mut teams = HashSet::with_capacity(matches.len() * 2);
    for m in matches {
        teams.insert(m.team_a.as_str());
        teams.insert(m.team_b.as_str());
    }
    teams
}

/// Teams that have appeared opposite `team` in at least one match.
pub fn played_against<'a>(team: &str, matches: &'a [Match]) -> HashSet<&'a str> {
    matches.iter().filter_map(|m| m.opponent_of(team)).collect()
}

/// Known teams that `team` has not met yet, excluding `team` itself.
///
/// A team that never appears in `matches` gets the whole team universe back.
pub fn suggest_next_opponents<'a>(team: &str, matches: &'a [Match]) -> Vec<&'a str> {
    let played = played_against(team, matches);

    let mut unplayed: Vec<&str> = get_teams(matches)
        .into_iter()
        .filter(|t| *t != team && !played.contains(t))
        .collect();
    unplayed.sort_unstable();
    unplayed
}

/// One [`TeamSchedule`] per known team, ordered by team name.
///
/// Opponents are collected in a single pass over `matches`.
pub fn opponent_report(matches: &[Match]) -> Vec<TeamSchedule> {
    let mut opponents: HashMap<&str, HashSet<&str>> = HashMap::new();
    for m in matches {
        opponents.entry(m.team_a.as_str()).or_default().insert(m.team_b.as_str());
        opponents.entry(m.team_b.as_str()).or_default().insert(m.team_a.as_str());
    }

    let mut teams: Vec<&str> = opponents.keys().copied().collect();
    teams.sort_unstable();

    teams
        .iter()
        .map(|&team| {
            let played = &opponents[team];
            TeamSchedule {
                team: team.to_string(),
                played: teams
                    .iter()
                    .filter(|t| played.contains(*t))
                    .map(|t| t.to_string())
                    .collect(),
                unplayed: teams
                    .iter()
                    .filter(|t| **t != team && !played.contains(*t))
                    .map(|t| t.to_string())
                    .collect(),
            }
        })
        .collect()
}
