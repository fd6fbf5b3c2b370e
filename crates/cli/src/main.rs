//! Operator CLI for the CRA patient data tree.
//!
//! Points the loader at a local data directory or a remote static host and
//! reports what a dashboard deployment would see: which patients the
//! manifest lists, and whether each patient's document set is complete.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use cra_core::constants::{DEFAULT_PATIENT_DATA_BASE, DEFAULT_PATIENT_DATA_DIR};
use cra_core::{CoreConfig, DocumentStore, FsStore, HttpStore, PatientDataService};

#[derive(Parser)]
#[command(name = "cra")]
#[command(about = "Clinical record audit data tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the patient data tree lives.
#[derive(Args)]
struct Source {
    /// Local patient data directory
    #[arg(long, conflicts_with = "base_url")]
    data_dir: Option<PathBuf>,
    /// Base URL of a static host serving the patient data tree
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients in the manifest
    List {
        #[command(flatten)]
        source: Source,
    },
    /// Verify that every patient's document set is complete
    Check {
        #[command(flatten)]
        source: Source,
    },
}

fn service_for(source: &Source) -> anyhow::Result<PatientDataService> {
    let (store, data_base): (Arc<dyn DocumentStore>, String) = match &source.base_url {
        Some(base_url) => (Arc::new(HttpStore::new(base_url)), base_url.clone()),
        None => {
            let dir = source
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PATIENT_DATA_DIR));
            (Arc::new(FsStore::new(dir)), DEFAULT_PATIENT_DATA_BASE.to_string())
        }
    };

    let cfg = Arc::new(CoreConfig::new(data_base)?);
    Ok(PatientDataService::new(cfg, store))
}

async fn list(source: Source) -> anyhow::Result<ExitCode> {
    let service = service_for(&source)?;
    let patients = service.discover_patients().await;

    if patients.is_empty() {
        println!("No patients found.");
        return Ok(ExitCode::SUCCESS);
    }

    for patient in patients {
        println!(
            "ID: {}, Name: {}, Folder: {}",
            patient.patient_id, patient.name, patient.folder_path
        );
    }
    Ok(ExitCode::SUCCESS)
}

async fn check(source: Source) -> anyhow::Result<ExitCode> {
    let service = service_for(&source)?;
    let patients = service.discover_patients().await;

    if patients.is_empty() {
        println!("No patients found.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut incomplete = 0usize;
    for patient in &patients {
        match service
            .load_patient_data(&patient.patient_id, &patient.folder_path)
            .await
        {
            Some(_) => println!("OK       {} {}", patient.patient_id, patient.name),
            None => {
                incomplete += 1;
                println!("MISSING  {} {}", patient.patient_id, patient.name);
            }
        }
    }

    if incomplete > 0 {
        eprintln!(
            "{} of {} patient records are incomplete",
            incomplete,
            patients.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    println!("All {} patient records are complete.", patients.len());
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { source } => list(source).await,
        Commands::Check { source } => check(source).await,
    }
}
