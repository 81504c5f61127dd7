//! valvespec CLI - valve list extraction from drawing table dumps

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use valvespec::{
    parse_file, ColumnClaim, ExtractOptions, ExtractionReport, JsonFormat, Keywords, PageSelection,
    ValveExtractor,
};

#[derive(Parser)]
#[command(name = "valvespec")]
#[command(version)]
#[command(about = "Extract valve specifications from drawing table dumps", long_about = None)]
struct Cli {
    /// Input table dump (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract valve items as JSON
    Extract {
        /// Input table dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process pages on one thread
        #[arg(long)]
        sequential: bool,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show why tables and rows were rejected
    Diagnose {
        /// Input table dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show document and extraction statistics
    Info {
        /// Input table dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show version information
    Version,
}

/// Options shared by every command that runs an extraction.
#[derive(Args)]
struct SelectionArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// JSON file with extra column keywords
    #[arg(long, value_name = "FILE", env = "VALVESPEC_KEYWORDS")]
    keywords: Option<PathBuf>,

    /// Let one column serve several roles
    #[arg(long)]
    shared_columns: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            sequential,
            selection,
        }) => build_options(&selection).and_then(|options| {
            cmd_extract(
                &input,
                output.as_deref(),
                compact,
                options.with_parallel(!sequential),
            )
        }),
        Some(Commands::Diagnose { input, selection }) => {
            build_options(&selection).and_then(|options| cmd_diagnose(&input, options))
        }
        Some(Commands::Info { input, selection }) => {
            build_options(&selection).and_then(|options| cmd_info(&input, options))
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_extract(&input, None, false, ExtractOptions::default())
            } else {
                println!("{}", "Usage: valvespec <FILE>".yellow());
                println!("       valvespec --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(selection: &SelectionArgs) -> Result<ExtractOptions, Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = selection.pages.as_deref() {
        PageSelection::parse(p)?
    } else {
        PageSelection::All
    };

    let claim = if selection.shared_columns {
        ColumnClaim::Shared
    } else {
        ColumnClaim::Exclusive
    };

    let mut options = ExtractOptions::new()
        .with_pages(page_selection)
        .with_column_claim(claim);

    if let Some(path) = selection.keywords.as_deref() {
        options = options.with_keywords(load_keywords(path)?);
    }

    Ok(options)
}

fn load_keywords(path: &Path) -> Result<Keywords, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let keywords = Keywords::default_with_json(&json)?;
    log::debug!("loaded extra keywords from {}", path.display());
    Ok(keywords)
}

fn extract_report(
    input: &Path,
    options: ExtractOptions,
) -> Result<ExtractionReport, Box<dyn std::error::Error>> {
    Ok(ValveExtractor::with_options(options).extract_file(input)?)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = extract_report(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = valvespec::render::to_json(&report.items, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!(
            "{} {} ({} items)",
            "Saved to".green(),
            path.display(),
            report.items.len()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_diagnose(input: &Path, options: ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = extract_report(input, options.with_diagnostics(true))?;

    println!("{}", "Rejections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if report.diagnostics.is_empty() {
        println!("{}", "None".green());
    }

    for diagnostic in &report.diagnostics {
        println!("{}", diagnostic.to_string().yellow());
    }

    println!();
    println!(
        "{} {} items, {} rejected rows",
        "Done!".green().bold(),
        report.stats.item_count,
        report.stats.rejected_row_count
    );

    Ok(())
}

fn cmd_info(input: &Path, options: ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let stats = ValveExtractor::with_options(options).extract(&doc).stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Tables".bold(), doc.table_count());

    println!();
    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages examined".bold(), stats.page_count);
    println!("{}: {}", "Candidate tables".bold(), stats.candidate_count);
    println!("{}: {}", "Accepted tables".bold(), stats.accepted_table_count);
    println!("{}: {}", "Data rows".bold(), stats.row_count);
    println!("{}: {}", "Items".bold(), stats.item_count);
    println!("{}: {}", "Rejected rows".bold(), stats.rejected_row_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "valvespec".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Valve specification extraction tool");
    println!();
    println!("License: MIT");
}
