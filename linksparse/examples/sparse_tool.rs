#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use linksparse::{read_matrix, write_matrix, write_row_sums, MatrixConfig, TextFormat};

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Inspect, convert and multiply sparse matrices stored as text")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print size, item count and density
    Stats {
        input: PathBuf,
        /// Input layout: ijk or rows
        #[arg(long, short, default_value = "ijk", value_parser = parse_format)]
        format: TextFormat,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the row and column chains
    Check {
        input: PathBuf,
        #[arg(long, short, default_value = "ijk", value_parser = parse_format)]
        format: TextFormat,
    },
    /// Rewrite a matrix in another layout
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "ijk", value_parser = parse_format)]
        from: TextFormat,
        #[arg(long, default_value = "rows", value_parser = parse_format)]
        to: TextFormat,
        /// Added to every written row id
        #[arg(long, default_value_t = 0)]
        row_offset: usize,
        /// Fixed number of decimals for written values
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Write the Gram matrix (transpose times self)
    Gram {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, short, default_value = "ijk", value_parser = parse_format)]
        format: TextFormat,
    },
    /// Write the sum of every non-empty row
    RowSums {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, short, default_value = "ijk", value_parser = parse_format)]
        format: TextFormat,
    },
}

#[cfg(feature = "cli")]
fn parse_format(name: &str) -> Result<TextFormat, String> {
    TextFormat::from_name(name)
        .ok_or_else(|| format!("unknown format '{name}', expected ijk or rows"))
}

/// Row-grouped input is row-major, so it can skip column walks
#[cfg(feature = "cli")]
fn load_config(format: TextFormat) -> MatrixConfig {
    if format.is_row_major() {
        MatrixConfig::append_only()
    } else {
        MatrixConfig::default()
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let start_time = std::time::Instant::now();

    match cli.command {
        Commands::Stats {
            input,
            format,
            json,
        } => {
            let matrix = read_matrix(&input, format, &load_config(format))?;
            let stats = matrix.stats();
            if json {
                println!("{}", stats.to_json()?);
            } else {
                println!("{stats}");
            }
        }
        Commands::Check { input, format } => {
            let matrix = read_matrix(&input, format, &load_config(format))?;
            let report = matrix.check();
            println!("{}", report.to_json()?);
            if !report.is_consistent() {
                return Err(format!("{} is inconsistent", input.display()).into());
            }
        }
        Commands::Convert {
            input,
            output,
            from,
            to,
            row_offset,
            precision,
        } => {
            let matrix = read_matrix(&input, from, &load_config(from))?;
            let mut config = MatrixConfig::default().with_row_offset(row_offset);
            if let Some(decimals) = precision {
                config = config.with_value_precision(decimals);
            }
            write_matrix(&matrix, &output, to, &config)?;
        }
        Commands::Gram {
            input,
            output,
            format,
        } => {
            let matrix = read_matrix(&input, format, &load_config(format))?;
            let gram = matrix.gram();
            println!("mean diagonal: {}", matrix.mean_gram_diagonal());
            write_matrix(&gram, &output, format, &MatrixConfig::default())?;
        }
        Commands::RowSums {
            input,
            output,
            format,
        } => {
            let matrix = read_matrix(&input, format, &load_config(format))?;
            write_row_sums(&matrix, &output)?;
        }
    }

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example sparse_tool");
    std::process::exit(1);
}
