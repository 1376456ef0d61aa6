//! Layout calculation for booklet imposition
//!
//! This module handles the page-number arithmetic of saddle-stitch binding:
//! which physical page lands on which side of which sheet. It knows nothing
//! about page content; `impose` maps content onto the layout.

mod signature;
mod types;

pub use signature::spread_layout;
pub use types::*;

pub(crate) use signature::padded_spread_layout;
