use crate::domain::student::Student;
use crate::utils::error::Result;

/// Persistence capability for a roster snapshot. One file-backed
/// implementation ships with the crate; other backing stores (a database, a
/// remote service) can implement the same contract without touching the
/// entity or collection logic.
pub trait StudentRepository {
    /// Replaces the stored roster with the given snapshot.
    fn save_students(&self, students: &[Student]) -> Result<()>;

    /// Best-effort load: invalid records are skipped with a diagnostic, never
    /// aborting the whole load. A missing store yields an empty roster.
    fn load_students(&self) -> Result<Vec<Student>>;
}
