use super::open_file_store;
use chrono::{DateTime, Local};
use kincsek_core::models::Lead;
use kincsek_core::storage::{LEADS_KEY, load_or_default, save};
use kincsek_core::{GenericError, KeyValueStore, leads};
use std::error::Error;
use std::path::PathBuf;

const MISSING_FIELDS_MESSAGE: &str = "Name and program are required!";

/// Lead management CLI.
/// Stands in for the public registration form and lets leads be inspected
/// without opening the dashboard
#[derive(clap::Args)]
#[command(version, about, long_about = None)]
pub struct LeadsArgs {
    /// Directory holding the stored JSON documents.
    /// Falls back to KINCSEK_DATA_DIR
    #[arg(long, short, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: LeadsCommand,
}

#[derive(clap::Subcommand)]
pub enum LeadsCommand {
    /// Record a new inquiry
    Add {
        #[arg(long)]
        name: String,

        /// Title of the program the inquiry is about
        #[arg(long)]
        program: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,
    },

    /// Print stored leads
    List {
        /// Only show leads whose name or program contains this text
        #[arg(long, short)]
        search: Option<String>,
    },
}

pub fn handle_leads(args: LeadsArgs) -> Result<(), Box<dyn Error>> {
    let store = open_file_store(args.data_dir);

    match args.command {
        LeadsCommand::Add {
            name,
            program,
            phone,
            email,
        } => {
            let lead = record_lead(&store, name, program, phone, email, Local::now())?;
            println!("Recorded lead {} ({})", lead.name, lead.id);
        }
        LeadsCommand::List { search } => {
            let lines = list_leads(&store, search.as_deref().unwrap_or(""));
            if lines.is_empty() {
                println!("No leads found.");
            }
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn record_lead(
    store: &dyn KeyValueStore,
    name: String,
    program: String,
    phone: String,
    email: String,
    now: DateTime<Local>,
) -> Result<Lead, GenericError> {
    if name.trim().is_empty() || program.trim().is_empty() {
        return Err(GenericError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let lead = Lead::new_inquiry(name, program, phone, email, now);
    let existing: Vec<Lead> = load_or_default(store, LEADS_KEY);
    save(store, LEADS_KEY, &leads::add_lead(&existing, lead.clone()))?;
    log::info!("Recorded lead {}", lead.id);
    Ok(lead)
}

fn list_leads(store: &dyn KeyValueStore, term: &str) -> Vec<String> {
    let stored: Vec<Lead> = load_or_default(store, LEADS_KEY);
    leads::filter_leads(&stored, term)
        .into_iter()
        .map(format_lead)
        .collect()
}

fn format_lead(lead: &Lead) -> String {
    format!(
        "{:<10} {:<24} {:<28} {} / {}  {}",
        lead.status.label(),
        lead.name,
        lead.program_title,
        lead.phone,
        lead.email,
        lead.timestamp
    )
}
