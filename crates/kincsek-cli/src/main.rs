use clap::{Parser, Subcommand};
use components::init::{InitArgs, handle_init};
use components::leads::{LeadsArgs, handle_leads};
use components::tui::{TuiArgs, handle_tui};
use dotenv::dotenv;
use log::error;
use std::process::ExitCode;

mod components;

/// Admin tools for the Kincsek art club website
#[derive(Parser)]
#[command(name = "kincsek", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the admin dashboard
    Tui(TuiArgs),

    /// Write an example .env file with every setting
    Init(InitArgs),

    /// Record or list registration inquiries
    Leads(LeadsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    // The dashboard installs its own in-memory logger
    let result = match cli.command {
        Commands::Tui(args) => handle_tui(args).await,
        Commands::Init(args) => {
            env_logger::init();
            handle_init(args)
        }
        Commands::Leads(args) => {
            env_logger::init();
            handle_leads(args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
