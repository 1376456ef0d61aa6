use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which printed sides are sent to the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrintOrder {
    /// Front then back of each sheet, for duplex printers
    #[default]
    DoubleSided,
    /// All fronts, then all backs, for running the stack through twice
    TwoSided,
}

/// Booklet output configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    pub print_order: PrintOrder,

    /// Limit previews to this many sheets (`None` shows the whole booklet)
    pub max_preview_sheets: Option<usize>,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            print_order: PrintOrder::DoubleSided,
            max_preview_sheets: None,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.max_preview_sheets == Some(0) {
            return Err(BookletError::Config(
                "Preview must show at least one sheet".to_string(),
            ));
        }
        Ok(())
    }
}
