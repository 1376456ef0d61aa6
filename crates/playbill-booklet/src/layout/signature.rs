//! Saddle-stitch sheet ordering
//!
//! All sheets of a saddle-stitched booklet are nested inside each other and
//! folded once, so the whole booklet is a single signature. Sheet `i`
//! (1-based) of an `N` page booklet carries:
//!
//! ```text
//!            left       right
//! Front:  [N - 2i + 2] [2i - 1]
//! Back:   [2i]         [N - 2i + 1]
//! ```
//!
//! An 8 page booklet therefore prints as:
//!
//! ```text
//! Sheet 1 front: [8, 1]   Sheet 1 back: [2, 7]
//! Sheet 2 front: [6, 3]   Sheet 2 back: [4, 5]
//! ```
//!
//! Stacking the sheets in order and folding yields pages `1..=N` when read
//! front to back.

use crate::constants::PAGES_PER_SHEET;
use crate::types::{BookletError, Result};

use super::{SheetSide, SpreadLayout};

// =============================================================================
// Spread Calculation
// =============================================================================

/// Calculate the page-number layout of every spread in the booklet.
///
/// Spreads are returned sheet by sheet, front immediately followed by back.
/// `total_pages` must be a multiple of 4; anything else would leave pages
/// without a slot, so it is rejected rather than truncated.
pub fn spread_layout(total_pages: usize) -> Result<Vec<SpreadLayout>> {
    if total_pages % PAGES_PER_SHEET != 0 {
        return Err(BookletError::UnpaddedPageCount { count: total_pages });
    }
    Ok(padded_spread_layout(total_pages))
}

/// Layout for a page count already known to be a multiple of 4
pub(crate) fn padded_spread_layout(total_pages: usize) -> Vec<SpreadLayout> {
    debug_assert_eq!(total_pages % PAGES_PER_SHEET, 0);

    let sheets = total_pages / PAGES_PER_SHEET;
    (0..sheets)
        .flat_map(|sheet_index| sheet_layout(total_pages, sheet_index))
        .collect()
}

/// Front and back of a single sheet (`sheet_index` is 0-based)
fn sheet_layout(total_pages: usize, sheet_index: usize) -> [SpreadLayout; 2] {
    let sheet = sheet_index + 1;
    let outer = 2 * sheet_index;

    [
        SpreadLayout::new(sheet, SheetSide::Front, total_pages - outer, outer + 1),
        SpreadLayout::new(
            sheet,
            SheetSide::Back,
            outer + 2,
            total_pages - (outer + 1),
        ),
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page_numbers(layout: &[SpreadLayout]) -> Vec<usize> {
        layout
            .iter()
            .flat_map(|s| [s.left_page, s.right_page])
            .collect()
    }

    #[test]
    fn test_single_sheet_order() {
        let layout = spread_layout(4).unwrap();
        assert_eq!(page_numbers(&layout), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_two_sheet_order() {
        let layout = spread_layout(8).unwrap();
        assert_eq!(page_numbers(&layout), vec![8, 1, 2, 7, 6, 3, 4, 5]);
    }

    #[test]
    fn test_sheet_sides_alternate() {
        let layout = spread_layout(12).unwrap();
        assert_eq!(layout.len(), 6);
        for (i, spread) in layout.iter().enumerate() {
            assert_eq!(spread.sheet, i / 2 + 1);
            let expected = if i % 2 == 0 {
                SheetSide::Front
            } else {
                SheetSide::Back
            };
            assert_eq!(spread.side, expected);
        }
    }

    #[test]
    fn test_empty_layout() {
        assert!(spread_layout(0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_unpadded_count() {
        for count in [1, 2, 3, 5, 6, 7, 9] {
            match spread_layout(count) {
                Err(BookletError::UnpaddedPageCount { count: c }) => assert_eq!(c, count),
                other => panic!("Expected UnpaddedPageCount for {count}, got {other:?}"),
            }
        }
    }
}
