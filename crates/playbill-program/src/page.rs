//! Renderable program pages

use serde::{Deserialize, Serialize};

/// Which roster a person belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    Cast,
    #[default]
    Production,
}

/// A cast or production team member
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: String,
    pub full_name: String,
    pub role_title: String,
    /// Rich-text biography
    pub bio: String,
    pub team_type: TeamType,
    pub headshot_url: String,
}

/// One logical page of a program
///
/// Every variant carries a stable `id` (for keying) and a `title`, so fillers
/// render exactly like content pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgramPage {
    Poster {
        id: String,
        title: String,
        image_url: String,
        subtitle: String,
    },
    Text {
        id: String,
        title: String,
        body: String,
    },
    Bios {
        id: String,
        title: String,
        people: Vec<Person>,
    },
    Image {
        id: String,
        title: String,
        image_url: String,
    },
    PhotoGrid {
        id: String,
        title: String,
        photos: Vec<String>,
    },
    Filler {
        id: String,
        title: String,
        body: String,
    },
}

impl ProgramPage {
    pub fn id(&self) -> &str {
        match self {
            ProgramPage::Poster { id, .. }
            | ProgramPage::Text { id, .. }
            | ProgramPage::Bios { id, .. }
            | ProgramPage::Image { id, .. }
            | ProgramPage::PhotoGrid { id, .. }
            | ProgramPage::Filler { id, .. } => id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ProgramPage::Poster { title, .. }
            | ProgramPage::Text { title, .. }
            | ProgramPage::Bios { title, .. }
            | ProgramPage::Image { title, .. }
            | ProgramPage::PhotoGrid { title, .. }
            | ProgramPage::Filler { title, .. } => title,
        }
    }

    /// Short type tag, matching the serialized `type` field
    pub fn kind(&self) -> &'static str {
        match self {
            ProgramPage::Poster { .. } => "poster",
            ProgramPage::Text { .. } => "text",
            ProgramPage::Bios { .. } => "bios",
            ProgramPage::Image { .. } => "image",
            ProgramPage::PhotoGrid { .. } => "photo_grid",
            ProgramPage::Filler { .. } => "filler",
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, ProgramPage::Filler { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_serializes_with_type_tag() {
        let page = ProgramPage::PhotoGrid {
            id: "production-photos".to_string(),
            title: "Production Photos".to_string(),
            photos: vec!["https://example.com/a.jpg".to_string()],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["type"], "photo_grid");
        assert_eq!(json["id"], "production-photos");
        assert_eq!(page.kind(), "photo_grid");
    }

    #[test]
    fn test_accessors() {
        let page = ProgramPage::Filler {
            id: "filler-0".to_string(),
            title: "Additional Information".to_string(),
            body: String::new(),
        };
        assert_eq!(page.id(), "filler-0");
        assert_eq!(page.title(), "Additional Information");
        assert!(page.is_filler());
    }
}
