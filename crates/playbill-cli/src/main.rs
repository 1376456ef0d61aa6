mod logger;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use playbill_booklet::{BookletPage, BookletSpread, Preview, PreviewMode, PrintOrder};
use playbill_program::{LayoutToken, Program, ProgramOptions, ProgramPage};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "playbill", about = "Theatre program booklet tools", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a program as a saddle-stitched booklet
    Paginate {
        /// Program document (JSON)
        #[arg(short, long)]
        program: PathBuf,

        /// Pagination options (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preview to print
        #[arg(long, default_value = "reading", value_enum)]
        view: ViewArg,

        /// Order of printed sides (overrides the config file)
        #[arg(long, value_enum)]
        print_order: Option<PrintOrderArg>,

        /// Only show the first N sheets (overrides the config file)
        #[arg(long)]
        max_sheets: Option<usize>,

        /// Print the preview as JSON
        #[arg(long)]
        json: bool,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Show how a page count pads out to sheets
    Stats {
        /// Number of designed pages
        #[arg(long)]
        pages: usize,
    },

    /// List layout tokens in default order
    Tokens,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Reading,
    Booklet,
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintOrderArg {
    DoubleSided,
    TwoSided,
}

impl From<ViewArg> for PreviewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Reading => Self::ReadingOrder,
            ViewArg::Booklet => Self::Imposition,
        }
    }
}

impl From<PrintOrderArg> for PrintOrder {
    fn from(arg: PrintOrderArg) -> Self {
        match arg {
            PrintOrderArg::DoubleSided => Self::DoubleSided,
            PrintOrderArg::TwoSided => Self::TwoSided,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Paginate {
            program,
            config,
            view,
            print_order,
            max_sheets,
            json,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => ProgramOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ProgramOptions::default(),
            };
            if let Some(order) = print_order {
                options.booklet.print_order = order.into();
            }
            if max_sheets.is_some() {
                options.booklet.max_preview_sheets = max_sheets;
            }
            options.validate()?;

            let document = Program::load(&program)
                .await
                .with_context(|| format!("Failed to load program {}", program.display()))?;
            let paginated = playbill_program::paginate(&document, &options);

            let stats = paginated.statistics();
            if json && stats_only {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            if !json {
                println!("{}", document.title);
                println!("Booklet Summary: {}", stats.summary());
            }
            if stats_only {
                return Ok(());
            }

            let preview = paginated.preview(view.into());
            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                print_preview(&preview);
            }
        }

        Commands::Stats { pages } => {
            let stats = playbill_booklet::try_calculate_statistics(pages)?;
            println!("Booklet Statistics:");
            println!("  Designed pages: {}", stats.source_pages);
            println!("  Padded pages: {}", stats.padded_pages);
            println!("  Filler pages added: {}", stats.filler_pages_added);
            println!("  Sheets: {}", stats.sheets);
            println!("  Printed sides: {}", stats.spreads);
        }

        Commands::Tokens => {
            for token in LayoutToken::ALL {
                println!("{}", token);
            }
        }
    }

    Ok(())
}

fn print_preview(preview: &Preview<&ProgramPage>) {
    match preview {
        Preview::ReadingOrder(pages) => {
            for page in pages {
                println!("Program Page {:>3}  {}", page.page_number, describe(page));
            }
        }
        Preview::Imposition(spreads) => {
            for spread in spreads {
                print_spread(spread);
            }
        }
    }
}

fn print_spread(spread: &BookletSpread<&ProgramPage>) {
    println!("Sheet {} {}", spread.sheet, spread.side);
    println!(
        "  left:  Page {:>3}  {}",
        spread.left.page_number,
        describe(&spread.left)
    );
    println!(
        "  right: Page {:>3}  {}",
        spread.right.page_number,
        describe(&spread.right)
    );
}

fn describe(page: &BookletPage<&ProgramPage>) -> String {
    format!("[{}] {}", page.content.kind(), page.content.title())
}
