use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// One completed contest between two teams.
/// Built through [`Match::new`] so both teams are non-empty and distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub date: NaiveDate,
    pub team_a: String,
    pub team_b: String,
    pub player_a: String,
    pub player_b: String,
    pub score_a: String,
    pub score_b: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("team identifier must not be empty")]
    EmptyTeam,
    #[error("team {0:?} cannot play itself")]
    SelfMatch(String),
}

impl Match {
    pub fn new(
        date: NaiveDate,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        score_a: impl Into<String>,
        score_b: impl Into<String>,
    ) -> Result<Self, MatchError> {
        let team_a = team_a.into();
        let team_b = team_b.into();

        if team_a.is_empty() || team_b.is_empty() {
            return Err(MatchError::EmptyTeam);
        }
        if team_a == team_b {
            return Err(MatchError::SelfMatch(team_a));
        }

        Ok(Self {
            date,
            team_a,
            team_b,
            player_a: player_a.into(),
            player_b: player_b.into(),
            score_a: score_a.into(),
            score_b: score_b.into(),
        })
    }

    /// Returns the team on the other side of the net from `team`, if `team` played.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.team_a == team {
            Some(self.team_b.as_str())
        } else if self.team_b == team {
            Some(self.team_a.as_str())
        } else {
            None
        }
    }
}
