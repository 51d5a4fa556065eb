// Domain layer: core models and ports (interfaces).

pub mod ports;
pub mod student;
pub mod university;

pub use student::Student;
pub use university::University;
