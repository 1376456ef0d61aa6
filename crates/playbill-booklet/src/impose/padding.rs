//! Padding page sequences to whole sheets

use crate::constants::PAGES_PER_SHEET;
use std::borrow::Cow;

/// Number of filler pages required to fill the last sheet
pub fn fillers_needed(page_count: usize) -> usize {
    match page_count % PAGES_PER_SHEET {
        0 => 0,
        remainder => PAGES_PER_SHEET - remainder,
    }
}

/// Pad `pages` to a multiple of 4 with pages from `make_filler`.
///
/// `make_filler` receives the filler's position among the fillers (0-based)
/// and is never called when `pages` already fills whole sheets. In that case
/// the input slice itself is returned, borrowed and uncopied.
pub fn pad_to_multiple_of_4<T, F>(pages: &[T], mut make_filler: F) -> Cow<'_, [T]>
where
    T: Clone,
    F: FnMut(usize) -> T,
{
    let needed = fillers_needed(pages.len());
    if needed == 0 {
        return Cow::Borrowed(pages);
    }

    let mut padded = Vec::with_capacity(pages.len() + needed);
    padded.extend_from_slice(pages);
    padded.extend((0..needed).map(&mut make_filler));
    log::debug!(
        "Padded {} pages with {} filler pages",
        pages.len(),
        needed
    );
    Cow::Owned(padded)
}

/// Fallible variant of [`pad_to_multiple_of_4`].
///
/// The first error from `make_filler` is returned unchanged; no further
/// fillers are requested and no partial sequence is produced.
pub fn try_pad_to_multiple_of_4<T, E, F>(
    pages: &[T],
    make_filler: F,
) -> std::result::Result<Cow<'_, [T]>, E>
where
    T: Clone,
    F: FnMut(usize) -> std::result::Result<T, E>,
{
    let needed = fillers_needed(pages.len());
    if needed == 0 {
        return Ok(Cow::Borrowed(pages));
    }

    let fillers = make_fillers(needed, make_filler)?;
    let mut padded = Vec::with_capacity(pages.len() + needed);
    padded.extend_from_slice(pages);
    padded.extend(fillers);
    Ok(Cow::Owned(padded))
}

/// Append fillers to an owned sequence
pub(crate) fn append_fillers<T, E, F>(
    pages: &mut Vec<T>,
    make_filler: F,
) -> std::result::Result<usize, E>
where
    F: FnMut(usize) -> std::result::Result<T, E>,
{
    let needed = fillers_needed(pages.len());
    if needed > 0 {
        // Build fillers first so a failing factory leaves `pages` untouched.
        let fillers = make_fillers(needed, make_filler)?;
        pages.extend(fillers);
    }
    Ok(needed)
}

fn make_fillers<T, E, F>(needed: usize, make_filler: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(usize) -> std::result::Result<T, E>,
{
    (0..needed).map(make_filler).collect()
}
