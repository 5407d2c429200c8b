use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// enquiry - contact form validation
#[derive(Parser)]
#[command(name = "enquiry")]
#[command(about = "Validate and submit the contact form from the terminal", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the validation rules
    Schema,
    /// Submit the form once with the given values
    Submit(cli::submit::SubmitArgs),
    /// Replay form events line by line from a script or stdin
    Session {
        /// Script file (reads stdin when omitted)
        #[arg(long)]
        script: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = enquiry::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    enquiry::observability::init_observability(
        "enquiry",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let accepted = match cli.command {
        Commands::Schema => cli::schema::print_schema().map(|_| true),
        Commands::Submit(args) => cli::submit::submit(&config, args),
        Commands::Session { script } => cli::session::run(&config, script),
    }?;

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
