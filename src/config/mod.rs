use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "student-roster")]
#[command(about = "A small roster manager backed by a flat text file")]
pub struct CliConfig {
    /// Roster file, overwritten on every change
    #[arg(long, default_value = "students.txt", global = true)]
    pub file: String,

    #[arg(long, help = "Enable verbose output", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a student to the roster
    Add {
        first_name: String,
        last_name: String,
        age: i32,
        average_grade: f64,
    },
    /// Remove a student by name
    Remove {
        first_name: String,
        last_name: String,
    },
    /// Find a student by name (case-insensitive)
    Find {
        first_name: String,
        last_name: String,
    },
    /// List the roster in file order
    List {
        #[arg(long, help = "Emit the roster as JSON")]
        json: bool,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("file", &self.file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_file_rejected() {
        let config = CliConfig {
            file: "  ".to_string(),
            verbose: false,
            command: Command::List { json: false },
        };
        assert!(config.validate().is_err());
    }
}
