//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::validation::StudentFields;

/// Field values for adding or updating a student.
///
/// Values are passed through as text; range checks happen in the service so
/// the CLI reports the same messages as any other caller.
#[derive(Debug, Clone, Args)]
pub struct StudentArgs {
    /// Student name
    #[arg(short, long)]
    pub name: String,

    /// Age in years (positive integer)
    #[arg(short, long, allow_hyphen_values = true)]
    pub age: String,

    /// Grade letter, A through F
    #[arg(short, long)]
    pub grade: String,

    /// Class section
    #[arg(short, long)]
    pub section: String,
}

impl From<&StudentArgs> for StudentFields {
    fn from(args: &StudentArgs) -> Self {
        StudentFields::new(
            args.name.clone(),
            args.age.clone(),
            args.grade.clone(),
            args.section.clone(),
        )
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Student ID to look up
    pub id: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Student ID to update
    pub id: String,

    /// New field values
    #[command(flatten)]
    pub fields: StudentArgs,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Student ID to delete
    pub id: String,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> StudentArgs {
        StudentArgs {
            name: "Alice".to_string(),
            age: "10".to_string(),
            grade: "b".to_string(),
            section: "X".to_string(),
        }
    }

    #[test]
    fn test_student_args_into_fields() {
        let fields = StudentFields::from(&args());
        assert_eq!(fields, StudentFields::new("Alice", "10", "b", "X"));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_update_command_debug() {
        let cmd = UpdateCommand {
            id: "3".to_string(),
            fields: args(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Alice"));
        assert!(debug_str.contains('3'));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
