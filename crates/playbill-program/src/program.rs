//! Program documents

use crate::layout::LayoutToken;
use crate::page::{Person, TeamType};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Content type of a free-form custom page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomPageKind {
    /// Rich-text body
    Text,
    /// Body is a single image URL
    Image,
    /// Body is a comma-separated list of image URLs
    Photos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPage {
    pub title: String,
    pub kind: CustomPageKind,
    pub body: String,
}

/// Everything the layout sequencer needs to know about a show
///
/// Missing fields deserialize to empty values; a missing layout order means
/// the default section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub title: String,
    pub theatre_name: String,
    pub show_dates: String,
    pub poster_image_url: String,

    // Rich-text sections
    pub director_notes: String,
    pub dramaturgical_note: String,
    pub billing_page: String,
    pub acts_songs: String,
    pub department_info: String,
    pub acknowledgements: String,
    pub season_calendar: String,

    pub actf_ad_image_url: String,
    pub production_photo_urls: Vec<String>,
    pub custom_pages: Vec<CustomPage>,
    pub people: Vec<Person>,
    pub layout_order: Vec<LayoutToken>,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            title: "Untitled Show".to_string(),
            theatre_name: String::new(),
            show_dates: String::new(),
            poster_image_url: String::new(),
            director_notes: String::new(),
            dramaturgical_note: String::new(),
            billing_page: String::new(),
            acts_songs: String::new(),
            department_info: String::new(),
            acknowledgements: String::new(),
            season_calendar: String::new(),
            actf_ad_image_url: String::new(),
            production_photo_urls: Vec::new(),
            custom_pages: Vec::new(),
            people: Vec::new(),
            layout_order: LayoutToken::default_order(),
        }
    }
}

impl Program {
    /// Load a program from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let program = serde_json::from_slice(&bytes)?;
        Ok(program)
    }

    /// Save a program to a JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Members of one team, sorted by name ignoring case
    pub fn team(&self, team_type: TeamType) -> Vec<Person> {
        let mut members: Vec<Person> = self
            .people
            .iter()
            .filter(|person| person.team_type == team_type)
            .cloned()
            .collect();
        members.sort_by_cached_key(|person| {
            (person.full_name.to_lowercase(), person.full_name.clone())
        });
        members
    }
}
