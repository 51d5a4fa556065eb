pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::file_repository::{FileStudentRepository, SkippedLine};
pub use config::CliConfig;
pub use domain::ports::StudentRepository;
pub use domain::{Student, University};
pub use utils::error::{Result, RosterError};
