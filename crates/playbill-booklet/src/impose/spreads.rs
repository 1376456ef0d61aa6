//! Mapping page content onto sheet spreads

use crate::layout::{SpreadLayout, padded_spread_layout, spread_layout};
use crate::types::*;

/// Build the printed spreads for a padded page sequence.
///
/// Fails with [`BookletError::UnpaddedPageCount`] unless `pages.len()` is a
/// multiple of 4. An empty sequence yields no spreads.
pub fn build_booklet_spreads<T>(pages: &[T]) -> Result<Vec<BookletSpread<&T>>> {
    let layout = spread_layout(pages.len())?;
    Ok(assign_pages(pages, layout))
}

/// Spreads for a sequence whose length is already a multiple of 4
pub(crate) fn padded_booklet_spreads<T>(pages: &[T]) -> Vec<BookletSpread<&T>> {
    assign_pages(pages, padded_spread_layout(pages.len()))
}

fn assign_pages<T>(pages: &[T], layout: Vec<SpreadLayout>) -> Vec<BookletSpread<&T>> {
    layout
        .into_iter()
        .map(|slot| BookletSpread {
            sheet: slot.sheet,
            side: slot.side,
            left: page_at(pages, slot.left_page),
            right: page_at(pages, slot.right_page),
        })
        .collect()
}

/// Page numbers are 1-based; indexing panics rather than wrapping if the
/// layout ever disagrees with the slice.
fn page_at<T>(pages: &[T], page_number: usize) -> BookletPage<&T> {
    BookletPage::new(page_number, &pages[page_number - 1])
}
