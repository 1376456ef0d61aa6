mod layout;
mod options;
mod page;
mod paginate;
mod program;
pub mod rich_text;
mod sequencer;
mod types;

pub use layout::{LayoutToken, parse_layout_order};
pub use options::*;
pub use page::*;
pub use paginate::{PaginatedProgram, paginate};
pub use program::*;
pub use sequencer::build_renderable_pages;
pub use types::*;
