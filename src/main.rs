//! CAMELS toolbox - extract measurement tables from CAMELS data files.

use anyhow::{Context, Result};
use camels_toolbox::export::write_csv_file;
use camels_toolbox::format::summarize_columns;
use camels_toolbox::{
    read_camels_file, FixedSelector, HeadlessSelector, PromptSelector, ReadOptions, Selector,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "camels-toolbox")]
#[command(about = "Extract measurement data from CAMELS files", long_about = None)]
struct Args {
    /// Path to the CAMELS (NeXus/HDF5) file
    file: PathBuf,

    /// Entry to read (picked automatically when omitted)
    #[arg(short, long, default_value = "")]
    entry: String,

    /// Dataset group to read (the main dataset when omitted)
    #[arg(short, long, default_value = "")]
    group: String,

    /// Do not hoist variable-signal groups into the columns
    #[arg(long)]
    no_variable_signals: bool,

    /// Answer every selection prompt with this index
    #[arg(long, conflicts_with = "non_interactive")]
    pick: Option<usize>,

    /// Fail instead of prompting when a selection is needed
    #[arg(long)]
    non_interactive: bool,

    /// Write the extracted columns to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the axes and signals declared by the dataset group
    #[arg(long)]
    hints: bool,

    /// Also read and print the fit results stored with the dataset
    #[arg(long)]
    fits: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(log: Option<&PathBuf>) -> Result<()> {
    if let Some(log_path) = log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn selector(args: &Args) -> Box<dyn Selector> {
    if let Some(index) = args.pick {
        Box::new(FixedSelector::new(index))
    } else if args.non_interactive {
        Box::new(HeadlessSelector)
    } else {
        Box::new(PromptSelector::stdio())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;
    tracing::info!("Starting camels-toolbox");

    let options = ReadOptions::new()
        .entry(args.entry.as_str())
        .data_set(args.group.as_str())
        .return_table(false)
        .read_variable_signal(!args.no_variable_signals)
        .return_fits(args.fits);

    let mut selector = selector(&args);
    let extraction = read_camels_file(&args.file, &options, selector.as_mut())
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let selection = &extraction.selection;
    let group = if selection.is_default_group() {
        "main dataset"
    } else {
        selection.dataset_group.as_str()
    };
    println!("Entry: {}", selection.entry);
    println!("Dataset: {}", group);

    if args.hints {
        match &extraction.hints {
            Some(hints) => {
                println!("Axes: {}", hints.x.join(", "));
                println!("Signals: {}", hints.y.join(", "));
            }
            None => println!("No plot hints"),
        }
    }

    if let Some(columns) = extraction.columns() {
        println!();
        print!("{}", summarize_columns(columns));

        if let Some(csv_path) = &args.csv {
            write_csv_file(columns, csv_path)?;
            tracing::info!("Wrote {}", csv_path.display());
        }
    }

    if let Some(fits) = &extraction.fits {
        println!();
        if fits.is_empty() {
            println!("No fits");
        }
        for fit in fits {
            println!("Fit: {}", fit.name);
            print!("{}", summarize_columns(&fit.parameters));
        }
    }

    tracing::info!("camels-toolbox exited");
    Ok(())
}
