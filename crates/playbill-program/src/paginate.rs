//! Program pagination - sequencer output through the booklet engine

use crate::options::{PageTemplate, ProgramOptions};
use crate::page::ProgramPage;
use crate::program::Program;
use crate::sequencer::build_renderable_pages;
use playbill_booklet::{
    Booklet, BookletSpread, BookletStatistics, Preview, PreviewMode, generate_preview,
    order_for_printing,
};

/// A program laid out as a saddle-stitched booklet
#[derive(Debug, Clone)]
pub struct PaginatedProgram {
    booklet: Booklet<ProgramPage>,
    options: ProgramOptions,
}

/// Lay out `program` as a booklet, padding with filler pages
pub fn paginate(program: &Program, options: &ProgramOptions) -> PaginatedProgram {
    let pages = build_renderable_pages(program);
    let booklet = Booklet::new(pages, |index| filler_page(&options.filler, index));

    log::info!(
        "Paginated '{}': {}",
        program.title,
        booklet.statistics().summary()
    );

    PaginatedProgram {
        booklet,
        options: options.clone(),
    }
}

fn filler_page(template: &PageTemplate, index: usize) -> ProgramPage {
    ProgramPage::Filler {
        id: format!("filler-{}", index),
        title: template.title.clone(),
        body: template.body.clone(),
    }
}

impl PaginatedProgram {
    /// Designed pages, before padding
    pub fn page_sequence(&self) -> &[ProgramPage] {
        self.booklet.source()
    }

    /// Pages in reading order, fillers included
    pub fn padded_pages(&self) -> &[ProgramPage] {
        self.booklet.pages()
    }

    pub fn booklet(&self) -> &Booklet<ProgramPage> {
        &self.booklet
    }

    /// Spreads in the configured print order
    pub fn spreads(&self) -> Vec<BookletSpread<&ProgramPage>> {
        order_for_printing(self.booklet.spreads(), self.options.booklet.print_order)
    }

    pub fn statistics(&self) -> BookletStatistics {
        self.booklet.statistics()
    }

    pub fn summary(&self) -> String {
        self.statistics().summary()
    }

    /// Preview limited by the configured sheet count
    pub fn preview(&self, mode: PreviewMode) -> Preview<&ProgramPage> {
        let preview = generate_preview(
            &self.booklet,
            mode,
            self.options.booklet.max_preview_sheets,
        );
        match preview {
            Preview::Imposition(spreads) => Preview::Imposition(order_for_printing(
                spreads,
                self.options.booklet.print_order,
            )),
            reading => reading,
        }
    }
}
