use crate::constants::{SIDES_PER_SHEET, checked_padded_page_count, sheet_count};
use crate::types::*;

/// Calculate statistics for a booklet of `source_pages` pages.
///
/// An empty booklet is valid and has no sheets.
///
/// # Panics
///
/// Panics if `source_pages` exceeds [`crate::constants::MAX_PAGE_COUNT`];
/// use [`try_calculate_statistics`] for untrusted counts.
pub fn calculate_statistics(source_pages: usize) -> BookletStatistics {
    match try_calculate_statistics(source_pages) {
        Ok(stats) => stats,
        Err(err) => panic!("{err}"),
    }
}

/// Calculate statistics, failing when the count cannot be padded
pub fn try_calculate_statistics(source_pages: usize) -> Result<BookletStatistics> {
    let padded_pages = checked_padded_page_count(source_pages).ok_or(BookletError::TooManyPages {
        count: source_pages,
    })?;
    let sheets = sheet_count(source_pages);

    Ok(BookletStatistics {
        source_pages,
        padded_pages,
        filler_pages_added: padded_pages - source_pages,
        sheets,
        spreads: sheets * SIDES_PER_SHEET,
    })
}

impl BookletStatistics {
    /// One-line summary for display above a preview
    pub fn summary(&self) -> String {
        format!(
            "{} designed pages, padded to {} for saddle-stitch (multiple of 4), {} sheets total.",
            self.source_pages, self.padded_pages, self.sheets
        )
    }
}
