use crate::layout::{PageSide, SheetSide};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Page count {count} is not a multiple of 4; pad the pages before building spreads")]
    UnpaddedPageCount { count: usize },
    #[error("Page count {count} is too large to pad to whole sheets")]
    TooManyPages { count: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// A logical page placed at a physical page number (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookletPage<T> {
    pub page_number: usize,
    pub content: T,
}

impl<T> BookletPage<T> {
    pub fn new(page_number: usize, content: T) -> Self {
        Self {
            page_number,
            content,
        }
    }

    /// Which side of the bound booklet this page lands on after folding
    pub fn page_side(&self) -> PageSide {
        PageSide::for_page_number(self.page_number)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BookletPage<U> {
        BookletPage {
            page_number: self.page_number,
            content: f(self.content),
        }
    }
}

/// One printed side of one sheet, holding two pages side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookletSpread<T> {
    /// Sheet number, starting at 1
    pub sheet: usize,
    pub side: SheetSide,
    pub left: BookletPage<T>,
    pub right: BookletPage<T>,
}

impl<T> BookletSpread<T> {
    /// Physical page numbers as `(left, right)`
    pub fn page_numbers(&self) -> (usize, usize) {
        (self.left.page_number, self.right.page_number)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BookletSpread<U> {
        BookletSpread {
            sheet: self.sheet,
            side: self.side,
            left: self.left.map(&mut f),
            right: self.right.map(&mut f),
        }
    }
}

impl<T: Clone> BookletSpread<&T> {
    /// Detach a borrowed spread from the page slice it was built from
    pub fn cloned(self) -> BookletSpread<T> {
        self.map(Clone::clone)
    }
}

/// Statistics about a booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Pages supplied before padding
    pub source_pages: usize,
    /// Pages after padding to whole sheets
    pub padded_pages: usize,
    /// Number of filler pages appended
    pub filler_pages_added: usize,
    /// Physical sheets of paper
    pub sheets: usize,
    /// Printed sides (two per sheet)
    pub spreads: usize,
}
