pub mod constants;
pub mod impose;
pub mod layout;
mod options;
mod preview;
mod stats;
mod types;

pub use impose::{
    Booklet, build_booklet_spreads, fillers_needed, order_for_printing, pad_to_multiple_of_4,
    try_pad_to_multiple_of_4,
};
pub use layout::{PageSide, SheetSide, SpreadLayout, spread_layout};
pub use options::*;
pub use preview::{Preview, PreviewMode, generate_preview};
pub use stats::{calculate_statistics, try_calculate_statistics};
pub use types::*;
