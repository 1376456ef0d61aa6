//! Layout sequencer - resolving section tokens into pages
//!
//! Walks the program's layout order and emits one page per section that has
//! something to show. Empty sections are skipped silently, so the sequence
//! only ever contains real content (or a single fallback page).

use crate::layout::LayoutToken;
use crate::page::{ProgramPage, TeamType};
use crate::program::{CustomPage, CustomPageKind, Program};
use crate::rich_text::{has_text, rich_text_has_content};

const FALLBACK_ID: &str = "fallback-info";
const FALLBACK_TITLE: &str = "Program Content";
const FALLBACK_BODY: &str =
    "No sections were provided yet. Add content and regenerate this playbill.";

/// Build the ordered page sequence for a program
pub fn build_renderable_pages(program: &Program) -> Vec<ProgramPage> {
    let cast = program.team(TeamType::Cast);
    let production = program.team(TeamType::Production);

    let mut pages = Vec::new();
    for &token in &program.layout_order {
        match token {
            LayoutToken::CustomPages => pages.extend(
                program
                    .custom_pages
                    .iter()
                    .enumerate()
                    .map(|(index, page)| custom_page(page, index)),
            ),
            LayoutToken::CastBios => {
                if !cast.is_empty() {
                    pages.push(ProgramPage::Bios {
                        id: "cast-bios".to_string(),
                        title: "Who's Who in the Cast".to_string(),
                        people: cast.clone(),
                    });
                }
            }
            LayoutToken::TeamBios => {
                if !production.is_empty() {
                    pages.push(ProgramPage::Bios {
                        id: "team-bios".to_string(),
                        title: "Who's Who in the Production Team".to_string(),
                        people: production.clone(),
                    });
                }
            }
            token => pages.extend(section_page(program, token)),
        }
    }

    if pages.is_empty() {
        log::info!("Program '{}' has no content; using fallback page", program.title);
        pages.push(ProgramPage::Filler {
            id: FALLBACK_ID.to_string(),
            title: FALLBACK_TITLE.to_string(),
            body: FALLBACK_BODY.to_string(),
        });
    }

    log::debug!(
        "Sequenced {} pages from {} layout tokens",
        pages.len(),
        program.layout_order.len()
    );
    pages
}

/// Single-page sections; `None` when the section is empty
fn section_page(program: &Program, token: LayoutToken) -> Option<ProgramPage> {
    match token {
        LayoutToken::Poster => has_text(&program.poster_image_url).then(|| ProgramPage::Poster {
            id: "poster".to_string(),
            title: program.title.clone(),
            image_url: program.poster_image_url.clone(),
            subtitle: format!("{} | {}", program.theatre_name, program.show_dates),
        }),
        LayoutToken::DirectorNote => {
            text_page("director-note", "Director's Note", &program.director_notes)
        }
        LayoutToken::DramaturgicalNote => text_page(
            "dramaturgical-note",
            "Dramaturgical Note",
            &program.dramaturgical_note,
        ),
        LayoutToken::Billing => text_page("billing", "Billing", &program.billing_page),
        LayoutToken::ActsSongs => text_page("acts-songs", "Acts & Songs", &program.acts_songs),
        LayoutToken::DepartmentInfo => text_page(
            "department-info",
            "Department Information",
            &program.department_info,
        ),
        LayoutToken::ActfAd => {
            (!program.actf_ad_image_url.is_empty()).then(|| ProgramPage::Image {
                id: "actf-ad".to_string(),
                title: "ACTF".to_string(),
                image_url: program.actf_ad_image_url.clone(),
            })
        }
        LayoutToken::Acknowledgements => text_page(
            "acknowledgements",
            "Acknowledgements",
            &program.acknowledgements,
        ),
        LayoutToken::SeasonCalendar => {
            text_page("season-calendar", "Season Calendar", &program.season_calendar)
        }
        LayoutToken::ProductionPhotos => {
            (!program.production_photo_urls.is_empty()).then(|| ProgramPage::PhotoGrid {
                id: "production-photos".to_string(),
                title: "Production Photos".to_string(),
                photos: program.production_photo_urls.clone(),
            })
        }
        LayoutToken::CastBios | LayoutToken::TeamBios | LayoutToken::CustomPages => None,
    }
}

fn text_page(id: &str, title: &str, body: &str) -> Option<ProgramPage> {
    rich_text_has_content(body).then(|| ProgramPage::Text {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    })
}

fn custom_page(page: &CustomPage, index: usize) -> ProgramPage {
    match page.kind {
        CustomPageKind::Text => ProgramPage::Text {
            id: format!("custom-text-{}", index),
            title: page.title.clone(),
            body: page.body.clone(),
        },
        CustomPageKind::Image => ProgramPage::Image {
            id: format!("custom-image-{}", index),
            title: page.title.clone(),
            image_url: page.body.clone(),
        },
        CustomPageKind::Photos => ProgramPage::PhotoGrid {
            id: format!("custom-photos-{}", index),
            title: page.title.clone(),
            photos: page
                .body
                .split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect(),
        },
    }
}
