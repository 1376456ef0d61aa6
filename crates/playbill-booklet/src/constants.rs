//! Shared constants for booklet imposition
//!
//! A saddle-stitched booklet is built from sheets folded once down the
//! middle. Every sheet carries two printed sides with two pages each.

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Pages printed side by side on one side of a sheet (left and right)
pub const PAGES_PER_SIDE: usize = 2;

/// Printed sides per sheet (front and back)
pub const SIDES_PER_SHEET: usize = 2;

/// Logical pages carried by one folded sheet.
/// This is also the smallest printable signature for saddle-stitch binding.
pub const PAGES_PER_SHEET: usize = PAGES_PER_SIDE * SIDES_PER_SHEET;

/// Largest page count that still pads to a whole number of sheets
pub const MAX_PAGE_COUNT: usize = usize::MAX / PAGES_PER_SHEET * PAGES_PER_SHEET;

/// Round a page count up to the next whole sheet.
///
/// # Panics
///
/// Panics if `pages` exceeds [`MAX_PAGE_COUNT`].
#[inline]
pub fn padded_page_count(pages: usize) -> usize {
    match checked_padded_page_count(pages) {
        Some(padded) => padded,
        None => panic!("page count {pages} exceeds {MAX_PAGE_COUNT}"),
    }
}

/// Round a page count up to the next whole sheet, or `None` on overflow
#[inline]
pub fn checked_padded_page_count(pages: usize) -> Option<usize> {
    pages.div_ceil(PAGES_PER_SHEET).checked_mul(PAGES_PER_SHEET)
}

/// Number of sheets needed for a page count (after padding)
#[inline]
pub fn sheet_count(pages: usize) -> usize {
    pages.div_ceil(PAGES_PER_SHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_page_count() {
        assert_eq!(padded_page_count(0), 0);
        assert_eq!(padded_page_count(1), 4);
        assert_eq!(padded_page_count(4), 4);
        assert_eq!(padded_page_count(5), 8);
        assert_eq!(padded_page_count(12), 12);
    }

    #[test]
    fn test_checked_padded_page_count_limit() {
        assert_eq!(checked_padded_page_count(MAX_PAGE_COUNT), Some(MAX_PAGE_COUNT));
        assert_eq!(checked_padded_page_count(MAX_PAGE_COUNT + 1), None);
        assert_eq!(checked_padded_page_count(usize::MAX), None);
    }

    #[test]
    fn test_sheet_count() {
        assert_eq!(sheet_count(0), 0);
        assert_eq!(sheet_count(3), 1);
        assert_eq!(sheet_count(8), 2);
        assert_eq!(sheet_count(9), 3);
    }
}
