//! `roster` - CLI for student records
//!
//! This binary is the presentation layer: it parses one command, runs the
//! matching record operation and prints the outcome.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use roster::cli::{render, Cli, Command, ConfigCommand, OutputFormat};
use roster::{init_logging, Config, Error, RecordStore, StudentFields, StudentService};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<Error>() {
                // Input and lookup failures are reported as-is, like the form messages
                Some(e @ Error::Validation { .. }) => eprintln!("{e}"),
                Some(Error::NotFound { .. }) => eprintln!("Student not found!"),
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        config,
        data_file,
        command,
        ..
    } = cli;
    // Config commands must work even when the active configuration is broken
    let service = || open_service(config.clone(), data_file.clone());

    match command {
        Command::Add(args) => {
            let id = service()?.add(&StudentFields::from(&args))?;
            println!("Student added successfully! Student ID: {id}");
        }
        Command::List(cmd) => {
            let records = service()?.list()?;
            println!("{}", render::records(&records, cmd.format)?);
        }
        Command::Search(cmd) => {
            let record = service()?
                .find(&cmd.id)?
                .ok_or_else(|| Error::not_found(cmd.id.trim()))?;
            if cmd.format == OutputFormat::Plain {
                println!("Student found!");
            }
            println!("{}", render::record(&record, cmd.format)?);
        }
        Command::Update(cmd) => {
            service()?.update(&cmd.id, &StudentFields::from(&cmd.fields))?;
            println!("Student updated successfully!");
        }
        Command::Delete(cmd) => {
            service()?.delete(&cmd.id)?;
            println!("Student deleted successfully!");
        }
        Command::Status(cmd) => handle_status(&service()?, cmd.json)?,
        Command::Config(cmd) => handle_config(config.clone(), cmd)?,
    }
    Ok(())
}

fn open_service(
    config_path: Option<PathBuf>,
    data_file: Option<PathBuf>,
) -> anyhow::Result<StudentService> {
    let data_file = match data_file {
        Some(path) => path,
        None => Config::load_from(config_path)
            .context("loading configuration")?
            .data_file(),
    };
    Ok(StudentService::new(RecordStore::new(data_file)))
}

fn handle_status(service: &StudentService, json: bool) -> anyhow::Result<()> {
    let store = service.store();
    let count = service.list()?.len();

    if json {
        let status = serde_json::json!({
            "data_file": store.path(),
            "exists": store.exists(),
            "students": count,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("roster status");
        println!("-------------");
        println!("Data file:     {}", store.path().display());
        println!("Exists:        {}", store.exists());
        println!("Students:      {count}");
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path).context("loading configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_file().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => validate_config(file.or(config_path))?,
    }
    Ok(())
}

fn validate_config(file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    Config::load_from(Some(path.clone()))
        .with_context(|| format!("configuration {} is invalid", path.display()))?;
    println!("Configuration is valid.");
    Ok(())
}
