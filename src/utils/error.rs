use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Validation error on {field}: {reason} (got '{value}')")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("Student '{first_name} {last_name}' already exists")]
    Duplicate {
        first_name: String,
        last_name: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
