//! Command-line interface for roster.
//!
//! This module provides the CLI structure and output rendering for the
//! `roster` binary.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DeleteCommand, ListCommand, OutputFormat, SearchCommand, StatusCommand,
    StudentArgs, UpdateCommand,
};

/// roster - Keep track of students in a plain text file
///
/// Add, list, search, update and delete student records (id, name, age,
/// grade, section) stored one per line in a pipe-delimited data file.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this data file instead of the configured one
    #[arg(short = 'f', long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new student
    Add(StudentArgs),

    /// View all students
    List(ListCommand),

    /// Search for a student by ID
    Search(SearchCommand),

    /// Update a student's details
    Update(UpdateCommand),

    /// Delete a student
    Delete(DeleteCommand),

    /// Show where records are stored and how many there are
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
