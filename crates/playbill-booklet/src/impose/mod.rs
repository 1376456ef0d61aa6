//! Booklet imposition - arranging pages for saddle-stitch printing
//!
//! This module orchestrates the imposition process:
//! 1. Pad the page sequence to whole sheets with filler pages
//! 2. Map every page onto its sheet, side and slot
//! 3. Order the resulting spreads for the printer

mod padding;
mod spreads;

pub use padding::{fillers_needed, pad_to_multiple_of_4, try_pad_to_multiple_of_4};
pub use spreads::build_booklet_spreads;

use crate::constants::PAGES_PER_SHEET;
use crate::options::PrintOrder;
use crate::stats::calculate_statistics;
use crate::types::*;
use padding::append_fillers;
use spreads::padded_booklet_spreads;
use std::convert::Infallible;

/// A page sequence padded to whole sheets
///
/// Holds the padded pages in reading order and remembers how many of them
/// were supplied by the caller. The length is always a multiple of 4, so
/// spreads can be built without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Booklet<T> {
    pages: Vec<T>,
    source_pages: usize,
}

impl<T> Booklet<T> {
    /// Pad `pages` with fillers from `make_filler` and take ownership.
    pub fn new(pages: Vec<T>, mut make_filler: impl FnMut(usize) -> T) -> Self {
        match Self::try_new(pages, |index| Ok::<_, Infallible>(make_filler(index))) {
            Ok(booklet) => booklet,
            Err(never) => match never {},
        }
    }

    /// Pad `pages` with a fallible filler factory.
    ///
    /// The first factory error is returned unchanged.
    pub fn try_new<E>(
        mut pages: Vec<T>,
        make_filler: impl FnMut(usize) -> std::result::Result<T, E>,
    ) -> std::result::Result<Self, E> {
        let source_pages = pages.len();
        let added = append_fillers(&mut pages, make_filler)?;
        log::debug!(
            "Booklet of {} pages ({} fillers) on {} sheets",
            pages.len(),
            added,
            pages.len() / PAGES_PER_SHEET
        );
        Ok(Self {
            pages,
            source_pages,
        })
    }

    /// Wrap a sequence that is already padded.
    pub fn from_padded(pages: Vec<T>) -> Result<Self> {
        if pages.len() % PAGES_PER_SHEET != 0 {
            return Err(BookletError::UnpaddedPageCount { count: pages.len() });
        }
        let source_pages = pages.len();
        Ok(Self {
            pages,
            source_pages,
        })
    }

    /// All pages in reading order, fillers included
    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// Pages supplied by the caller, without fillers
    pub fn source(&self) -> &[T] {
        &self.pages[..self.source_pages]
    }

    /// Filler pages appended at the tail
    pub fn fillers(&self) -> &[T] {
        &self.pages[self.source_pages..]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn sheet_count(&self) -> usize {
        self.pages.len() / PAGES_PER_SHEET
    }

    /// Spreads in print order: sheet by sheet, front then back
    pub fn spreads(&self) -> Vec<BookletSpread<&T>> {
        padded_booklet_spreads(&self.pages)
    }

    /// Pages numbered 1..N in reading order
    pub fn numbered_pages(&self) -> impl Iterator<Item = BookletPage<&T>> {
        self.pages
            .iter()
            .enumerate()
            .map(|(index, page)| BookletPage::new(index + 1, page))
    }

    pub fn statistics(&self) -> BookletStatistics {
        calculate_statistics(self.source_pages)
    }

    pub fn into_pages(self) -> Vec<T> {
        self.pages
    }
}

/// Reorder spreads for the chosen print workflow.
///
/// Sorting is stable, so spreads keep their sheet order within each side.
pub fn order_for_printing<T>(
    mut spreads: Vec<BookletSpread<T>>,
    order: PrintOrder,
) -> Vec<BookletSpread<T>> {
    match order {
        PrintOrder::DoubleSided => {
            spreads.sort_by_key(|s| (s.sheet, s.side));
        }
        PrintOrder::TwoSided => {
            spreads.sort_by_key(|s| (s.side, s.sheet));
        }
    }
    spreads
}
