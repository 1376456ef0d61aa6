//! Layout data types for imposition

/// Which side of a bound booklet this page appears on after folding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageSide {
    /// Right-hand page (odd page numbers)
    Recto,
    /// Left-hand page (even page numbers)
    Verso,
}

impl PageSide {
    pub fn for_page_number(page_number: usize) -> Self {
        if page_number % 2 == 1 {
            PageSide::Recto
        } else {
            PageSide::Verso
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SheetSide {
    /// Outer side of the sheet (printed first in duplex)
    Front,
    /// Inner side of the sheet (printed second in duplex)
    Back,
}

impl SheetSide {
    pub fn as_str(self) -> &'static str {
        match self {
            SheetSide::Front => "front",
            SheetSide::Back => "back",
        }
    }
}

impl std::fmt::Display for SheetSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page numbers printed on one side of one sheet
///
/// Page numbers are 1-based physical page numbers in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadLayout {
    /// Sheet number, starting at 1
    pub sheet: usize,
    pub side: SheetSide,
    pub left_page: usize,
    pub right_page: usize,
}

impl SpreadLayout {
    pub fn new(sheet: usize, side: SheetSide, left_page: usize, right_page: usize) -> Self {
        Self {
            sheet,
            side,
            left_page,
            right_page,
        }
    }
}
