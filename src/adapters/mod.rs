// Adapters layer: concrete implementations of the domain ports.

pub mod file_repository;

pub use file_repository::{FileStudentRepository, SkippedLine};
