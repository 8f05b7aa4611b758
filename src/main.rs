#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fixturekit::{
    ArchiveFormat, Archiver, ExportFormat, Exporter, FixtureResult, GenerateSpec, RecordStore,
};

#[derive(Parser, Debug)]
#[command(name = "fixturekit")]
#[command(about = "Synthetic tabular fixture generation, export and archiving", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set FIXTUREKIT_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags that populate the record store before an export or archive runs.
/// Generation happens first, then file imports, then literal rows.
#[derive(Args, Debug)]
struct PopulateArgs {
    /// Generate synthetic rows (row count is random unless --rows is given)
    #[arg(long)]
    generate: bool,
    /// Number of rows to generate
    #[arg(long)]
    rows: Option<usize>,
    /// Number of columns per generated row
    #[arg(long, default_value_t = 10)]
    columns: usize,
    /// Approximate cell length for generated rows
    #[arg(long, default_value_t = 10)]
    cell_length: usize,
    /// Import rows from a delimited text file (repeatable)
    #[arg(long)]
    import: Vec<PathBuf>,
    /// Append one literal delimited row (repeatable)
    #[arg(long = "row")]
    literal_rows: Vec<String>,
    /// Cell delimiter for import, literal rows and txt export
    #[arg(long, default_value_t = '|')]
    delimiter: char,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the populated store to a single file
    Export {
        #[command(flatten)]
        populate: PopulateArgs,
        /// Output path stem (extension is appended from the format)
        #[arg(long, default_value = "file")]
        out: PathBuf,
        /// Export format: csv, xlsx or txt
        #[arg(long, default_value = "txt")]
        format: String,
        /// Truncate an existing txt target instead of appending
        #[arg(long)]
        truncate: bool,
    },

    /// Export the populated store and bundle the results into archive parts
    Archive {
        #[command(flatten)]
        populate: PopulateArgs,
        /// Archive name stem (part index and extension are appended)
        #[arg(long, default_value = "archive")]
        name: String,
        /// Archive format: zip or tar
        #[arg(long, default_value = "zip")]
        format: String,
        /// Maximum bytes per archive part
        #[arg(long)]
        max_size: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("FIXTUREKIT_LOG").unwrap_or_else(|_| {
        if verbose {
            "fixturekit=debug".to_string()
        } else {
            "fixturekit=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn populate(args: &PopulateArgs) -> FixtureResult<RecordStore> {
    let mut store = RecordStore::with_delimiter(args.delimiter);

    if args.generate || args.rows.is_some() {
        let spec = GenerateSpec {
            rows: args.rows,
            columns: args.columns,
            cell_length: args.cell_length,
        };
        store.append_generated(&spec);
    }
    for path in &args.import {
        store.append_from_file(path)?;
    }
    for line in &args.literal_rows {
        store.append_from_text(line)?;
    }

    Ok(store)
}

fn run(cli: Cli) -> FixtureResult<()> {
    match cli.command {
        Commands::Export {
            populate: populate_args,
            out,
            format,
            truncate,
        } => {
            let format: ExportFormat = format.parse()?;
            let store = populate(&populate_args)?;
            let path = Exporter::new(&store)
                .truncate_text(truncate)
                .export_to_file(&out, format)?;
            println!("export: {} rows -> {}", store.len(), path.display());
        }
        Commands::Archive {
            populate: populate_args,
            name,
            format,
            max_size,
        } => {
            let format: ArchiveFormat = format.parse()?;
            let store = populate(&populate_args)?;
            let parts = Archiver::new(&store).build_archive(&name, format, max_size)?;
            let names: Vec<String> = parts.iter().map(|p| p.display().to_string()).collect();
            println!("archive: {} rows -> {}", store.len(), names.join(", "));
        }
    }
    Ok(())
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
