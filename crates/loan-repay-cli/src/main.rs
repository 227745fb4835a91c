mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::quote::{QuoteArgs, RenderArgs};

/// Loan repayment quotes from fixed lending rules
#[derive(Parser)]
#[command(
    name = "lrq",
    version,
    about = "Loan repayment quotes from fixed lending rules",
    long_about = "A CLI for quoting loan repayments with decimal precision. \
                  Validates the amount to borrow, monthly salary and salary \
                  percentage, then computes the administration fee, total \
                  cost, monthly repayment, final month payment and the time \
                  to repay."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the inputs and compute a repayment quote
    Quote(QuoteArgs),
    /// Validate the inputs and report every field's pass/fail status
    Check(QuoteArgs),
    /// Compute a quote and render it through the result template
    Render(RenderArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Quote(args) => commands::quote::run_quote(args),
        Commands::Check(args) => commands::quote::run_check(args),
        Commands::Render(args) => match commands::quote::run_render(args) {
            Ok(text) => {
                print!("{text}");
                return;
            }
            Err(e) => Err(e),
        },
        Commands::Version => {
            println!("lrq {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
