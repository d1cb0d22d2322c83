//! QFM Command-Line Interface
//!
//! Encode classical data vectors as feature map circuits and inspect the
//! configuration schema of each feature map.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{encode, schema, version};

/// QFM - quantum feature map encoding
#[derive(Parser)]
#[command(name = "qfm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a data vector as a feature map circuit
    Encode {
        /// Data vector, comma separated (0.5,1.0) or a JSON array ([0.5, 1.0])
        #[arg(short, long, allow_hyphen_values = true)]
        data: String,

        /// Feature map (first-order, second-order); ignored with --config
        #[arg(short, long, default_value = "first-order")]
        kind: String,

        /// Number of encoding rounds
        #[arg(long)]
        depth: Option<u32>,

        /// Entanglement pattern for second-order maps (full, linear)
        #[arg(long)]
        entanglement: Option<String>,

        /// Feature map document (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Emit the inverse circuit
        #[arg(long)]
        inverse: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the configuration schema of a feature map
    Schema {
        /// Feature map (all if omitted)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Encode {
            data,
            kind,
            depth,
            entanglement,
            config,
            inverse,
            format,
            output,
        } => encode::execute(&encode::EncodeArgs {
            data: &data,
            kind: &kind,
            depth,
            entanglement: entanglement.as_deref(),
            config: config.as_deref(),
            inverse,
            format: &format,
            output: output.as_deref(),
        }),

        Commands::Schema { kind } => schema::execute(kind.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
