use crate::types::*;
use playbill_booklet::BookletOptions;
use serde::{Deserialize, Serialize};

/// Title and body used for generated pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub title: String,
    pub body: String,
}

impl PageTemplate {
    /// Default template for pages that pad the booklet to whole sheets
    pub fn filler() -> Self {
        Self {
            title: "Additional Information".to_string(),
            body: "Space reserved for additional production notes, photos, or sponsor content."
                .to_string(),
        }
    }
}

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramOptions {
    pub booklet: BookletOptions,
    pub filler: PageTemplate,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            booklet: BookletOptions::default(),
            filler: PageTemplate::filler(),
        }
    }
}

impl ProgramOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ProgramError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ProgramError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.booklet.validate()?;

        if self.filler.title.trim().is_empty() {
            return Err(ProgramError::Config(
                "Filler pages need a title".to_string(),
            ));
        }

        Ok(())
    }
}
