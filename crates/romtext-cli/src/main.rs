//! romtext CLI - Command-line interface for building ROM text banks
//!
//! This binary wraps plain text for a variable-width font and packs it into
//! fixed-size cartridge banks.

use clap::{Parser, Subcommand};
use romtext_spec::DEFAULT_START_BANK;
use std::process::ExitCode;

// Use modules from the library crate
use romtext_cli::{commands, emit::OutputFormat, logging};

/// romtext - ROM text bank builder
#[derive(Parser)]
#[command(name = "romtext")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logs on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap text and pack it into banks
    Generate {
        /// Path to the JSON width table (first entry is space)
        #[arg(short, long)]
        widths: String,

        /// Text file to convert (default: stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Number of the first bank
        #[arg(long, default_value_t = DEFAULT_START_BANK)]
        start_bank: u32,

        /// Output format
        #[arg(short, long, default_value = "asm", value_parser = ["asm", "plaintext", "bin"])]
        format: String,

        /// Output file, or output directory for bin (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Built-in layout profile (default, wide)
        #[arg(long, value_parser = ["default", "wide"])]
        profile: Option<String>,

        /// JSON layout profile file (overrides --profile)
        #[arg(long)]
        profile_file: Option<String>,

        /// Write a JSON report of the generated banks
        #[arg(long)]
        report: Option<String>,
    },

    /// Check that a width table is usable with a layout profile
    CheckWidths {
        /// Path to the JSON width table (first entry is space)
        #[arg(short, long)]
        widths: String,

        /// Built-in layout profile (default, wide)
        #[arg(long, value_parser = ["default", "wide"])]
        profile: Option<String>,

        /// JSON layout profile file (overrides --profile)
        #[arg(long)]
        profile_file: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            widths,
            input,
            start_bank,
            format,
            output,
            profile,
            profile_file,
            report,
        } => format
            .parse::<OutputFormat>()
            .map_err(anyhow::Error::msg)
            .and_then(|format| {
                commands::generate::run(
                    &widths,
                    input.as_deref(),
                    start_bank,
                    format,
                    output.as_deref(),
                    profile.as_deref(),
                    profile_file.as_deref(),
                    report.as_deref(),
                )
            }),
        Commands::CheckWidths {
            widths,
            profile,
            profile_file,
        } => commands::check_widths::run(&widths, profile.as_deref(), profile_file.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
