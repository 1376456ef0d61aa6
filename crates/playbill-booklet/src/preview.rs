use crate::constants::{PAGES_PER_SHEET, SIDES_PER_SHEET};
use crate::impose::Booklet;
use crate::types::*;

/// How a booklet is previewed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PreviewMode {
    /// Padded pages one after another, as a reader sees them
    #[default]
    ReadingOrder,
    /// Sheet sides as they come off the printer
    Imposition,
}

/// A rendered-ready preview of a booklet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", content = "items", rename_all = "snake_case"))]
pub enum Preview<T> {
    ReadingOrder(Vec<BookletPage<T>>),
    Imposition(Vec<BookletSpread<T>>),
}

impl<T> Preview<T> {
    pub fn len(&self) -> usize {
        match self {
            Preview::ReadingOrder(pages) => pages.len(),
            Preview::Imposition(spreads) => spreads.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a preview of the booklet
/// Limits the preview to the first `max_sheets` sheets when given
pub fn generate_preview<T>(
    booklet: &Booklet<T>,
    mode: PreviewMode,
    max_sheets: Option<usize>,
) -> Preview<&T> {
    let sheets = max_sheets.map_or(booklet.sheet_count(), |max| {
        max.min(booklet.sheet_count())
    });

    match mode {
        PreviewMode::ReadingOrder => Preview::ReadingOrder(
            booklet
                .numbered_pages()
                .take(sheets * PAGES_PER_SHEET)
                .collect(),
        ),
        PreviewMode::Imposition => {
            let mut spreads = booklet.spreads();
            spreads.truncate(sheets * SIDES_PER_SHEET);
            Preview::Imposition(spreads)
        }
    }
}
