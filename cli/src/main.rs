mod logging;
mod report;
mod tui;

use anyhow::Result;
use clap::{Args, Parser};
use pizzadash_core::{parse_criteria, repository, Config, DashboardService, FilterCriteria};
use tracing::warn;

#[derive(Parser)]
#[command(name = "pizzadash")]
#[command(about = "Pizza sales dashboard for the terminal", long_about = None)]
struct Cli {
    /// Dataset file path or http(s) URL (default: ~/.pizzadash/dataset_23.json)
    #[arg(long, short = 'd', global = true)]
    dataset: Option<String>,

    /// Fail the load on the first invalid record instead of skipping it
    #[arg(long, global = true)]
    strict: bool,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct FilterArgs {
    /// Months to include: 1-12, names or ranges (e.g. -m jan-mar -m 7)
    #[arg(long = "month", short = 'm')]
    months: Vec<String>,

    /// Product ids (pizza_type_id) to include, comma separated or repeated
    #[arg(long = "product", short = 'p')]
    products: Vec<String>,
}

impl FilterArgs {
    fn criteria(&self) -> Result<FilterCriteria> {
        parse_criteria(&self.months, &self.products)
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the five headline numbers
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print every chart series as tables
    Report {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the dashboard view as JSON to stdout
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the product ids in the dataset
    Products,
    /// Open the interactive dashboard
    Tui {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(None)?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    let log_dir = if interactive {
        Some(repository::default_data_dir()?)
    } else {
        None
    };
    logging::initialize(level, log_dir.as_deref())?;

    let location = cli.dataset.clone().or_else(|| config.dataset.clone());
    let strict = cli.strict || config.strict;
    let repo = repository::open(location.as_deref(), strict)?;

    // A failed load stops here; nothing is aggregated against a missing dataset.
    let service = match DashboardService::load(repo.as_ref()) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Failed to load dataset from {}: {:#}", repo.describe(), e);
            std::process::exit(1);
        }
    };

    let load_report = &service.dataset().report;
    if load_report.skipped_rows > 0 {
        warn!(
            skipped = load_report.skipped_rows,
            first = ?load_report.first_skipped,
            "some records were skipped"
        );
        if !interactive {
            eprintln!(
                "Warning: skipped {} of {} records that failed validation",
                load_report.skipped_rows, load_report.total_rows
            );
        }
    }

    match cli.command {
        Some(Commands::Summary { filter }) => {
            let view = service.refresh(&filter.criteria()?);
            report::print_summary(&view);
        }
        Some(Commands::Report { filter }) => {
            let view = service.refresh(&filter.criteria()?);
            report::print_report(&view);
        }
        Some(Commands::Export { filter, pretty }) => {
            let view = service.refresh(&filter.criteria()?);
            let json = if pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{}", json);
        }
        Some(Commands::Products) => {
            report::print_products(&service.dataset().products());
        }
        Some(Commands::Tui { filter }) => {
            tui::run(service, filter.criteria()?)?;
        }
        None => {
            tui::run(service, FilterCriteria::default())?;
        }
    }
    Ok(())
}
