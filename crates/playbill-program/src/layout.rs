//! Section tokens controlling program page order

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A configurable program section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutToken {
    Poster,
    DirectorNote,
    DramaturgicalNote,
    Billing,
    ActsSongs,
    CastBios,
    TeamBios,
    DepartmentInfo,
    ActfAd,
    Acknowledgements,
    SeasonCalendar,
    ProductionPhotos,
    CustomPages,
}

impl LayoutToken {
    /// Every token, in the default program order
    pub const ALL: [LayoutToken; 13] = [
        LayoutToken::Poster,
        LayoutToken::DirectorNote,
        LayoutToken::DramaturgicalNote,
        LayoutToken::Billing,
        LayoutToken::ActsSongs,
        LayoutToken::CastBios,
        LayoutToken::TeamBios,
        LayoutToken::DepartmentInfo,
        LayoutToken::ActfAd,
        LayoutToken::Acknowledgements,
        LayoutToken::SeasonCalendar,
        LayoutToken::ProductionPhotos,
        LayoutToken::CustomPages,
    ];

    pub fn default_order() -> Vec<LayoutToken> {
        Self::ALL.to_vec()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutToken::Poster => "poster",
            LayoutToken::DirectorNote => "director_note",
            LayoutToken::DramaturgicalNote => "dramaturgical_note",
            LayoutToken::Billing => "billing",
            LayoutToken::ActsSongs => "acts_songs",
            LayoutToken::CastBios => "cast_bios",
            LayoutToken::TeamBios => "team_bios",
            LayoutToken::DepartmentInfo => "department_info",
            LayoutToken::ActfAd => "actf_ad",
            LayoutToken::Acknowledgements => "acknowledgements",
            LayoutToken::SeasonCalendar => "season_calendar",
            LayoutToken::ProductionPhotos => "production_photos",
            LayoutToken::CustomPages => "custom_pages",
        }
    }
}

impl fmt::Display for LayoutToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutToken {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| ProgramError::UnknownLayoutToken(s.to_string()))
    }
}

/// Parse a newline-separated list of tokens.
///
/// Blank lines are ignored. An empty list falls back to the default order.
pub fn parse_layout_order(text: &str) -> Result<Vec<LayoutToken>> {
    let tokens = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(LayoutToken::from_str)
        .collect::<Result<Vec<LayoutToken>>>()?;

    if tokens.is_empty() {
        return Ok(LayoutToken::default_order());
    }
    Ok(tokens)
}
